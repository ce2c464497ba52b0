//! peelkit command-line front end.
//!
//! Parses arguments, loads configuration, installs logging, wires the
//! infra and platform adapters into the use cases and renders results as
//! text for stdout.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use anyhow::Result;
use pk_core::ports::AppDirsPort;
use pk_platform::DirsAppDirsAdapter;
use tracing::warn;

use crate::cli::{Cli, Command};

/// Runs one CLI invocation and returns what should be printed on stdout.
pub async fn run(cli: Cli) -> Result<String> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs();
    let config = bootstrap::resolve_config(cli.config.as_deref(), app_dirs.as_ref().ok())?;

    let logs_dir = match (&app_dirs, config.file_logging) {
        (Ok(dirs), true) => Some(dirs.logs_dir()),
        _ => None,
    };
    bootstrap::tracing::init_tracing_subscriber(logs_dir.as_deref())?;

    if let Err(e) = &app_dirs {
        warn!(error = %e, "platform directories unavailable, using defaults");
    }

    match cli.command {
        Command::Clip { action } => {
            let deps = bootstrap::wire_dependencies(&config)?;
            commands::clip::run(&deps, action).await
        }
        other => commands::run_pure(other, &config),
    }
}
