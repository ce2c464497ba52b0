//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Values are taken as
//! found; the only decision made here is where the file lives and which
//! store path to fall back to when the file leaves it empty.

use anyhow::Context;
use std::path::Path;

use pk_core::config::AppConfig;
use pk_core::ports::AppDirs;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the effective configuration for this run.
///
/// An explicit `--config` path must load. Otherwise the per-user config
/// file is used when present, and system defaults when it is not.
pub fn resolve_config(
    explicit: Option<&Path>,
    app_dirs: Option<&AppDirs>,
) -> anyhow::Result<AppConfig> {
    let mut config = match (explicit, app_dirs) {
        (Some(path), _) => load_config(path)?,
        (None, Some(dirs)) if dirs.config_path().is_file() => load_config(&dirs.config_path())?,
        _ => AppConfig::default(),
    };

    if config.store_path.as_os_str().is_empty() {
        if let Some(dirs) = app_dirs {
            config.store_path = dirs.store_path();
        }
    }

    Ok(config)
}
