//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! Missing keys map to the documented defaults below; values are otherwise
//! taken as found, with no range checks.

use std::path::PathBuf;

use crate::chain::DEFAULT_MAX_ITERATIONS;
use crate::history::DEFAULT_CAPACITY;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum clipboard history entries kept
    pub history_max_entries: usize,

    /// Key-value store file (path info only, no existence check).
    /// Empty means "use the platform data directory".
    pub store_path: PathBuf,

    /// Upper bound on auto-solve iterations
    pub auto_solve_max_iterations: usize,

    /// Also write logs to a file in the app log directory
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            history_max_entries: toml_value
                .get("history")
                .and_then(|h| h.get("max_entries"))
                .and_then(|v| v.as_integer())
                .map(|n| n.max(0) as usize)
                .unwrap_or(DEFAULT_CAPACITY),
            store_path: PathBuf::from(
                toml_value
                    .get("history")
                    .and_then(|h| h.get("store_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            auto_solve_max_iterations: toml_value
                .get("chain")
                .and_then(|c| c.get("auto_solve_max_iterations"))
                .and_then(|v| v.as_integer())
                .map(|n| n.max(0) as usize)
                .unwrap_or(DEFAULT_MAX_ITERATIONS),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// **Note**: the base directory is computed by the caller using
    /// platform-specific logic (e.g., `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            store_path: data_dir.join("store.json"),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_max_entries: DEFAULT_CAPACITY,
            store_path: PathBuf::new(),
            auto_solve_max_iterations: DEFAULT_MAX_ITERATIONS,
            file_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_uses_defaults_when_missing() {
        let toml_value: Value = toml::from_str("[history]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.history_max_entries, 10);
        assert_eq!(config.auto_solve_max_iterations, 10);
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [history]
            max_entries = 25
            store_path = "/tmp/peelkit/store.json"

            [chain]
            auto_solve_max_iterations = 4

            [logging]
            file_logging = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.history_max_entries, 25);
        assert_eq!(config.store_path, PathBuf::from("/tmp/peelkit/store.json"));
        assert_eq!(config.auto_solve_max_iterations, 4);
        assert!(config.file_logging);
    }

    #[test]
    fn test_from_toml_clamps_negative_counts_to_zero() {
        let toml_value: Value = toml::from_str("[history]\nmax_entries = -3\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.history_max_entries, 0);
    }

    #[test]
    fn test_with_system_defaults_creates_store_path() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.store_path, PathBuf::from("/tmp/test/store.json"));
        assert_eq!(config.history_max_entries, 10);
        assert!(!config.file_logging);
    }
}
