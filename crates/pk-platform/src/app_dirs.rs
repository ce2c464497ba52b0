use std::path::PathBuf;

use pk_core::ports::{AppDirs, AppDirsError, AppDirsPort};

const APP_DIR_NAME: &str = "peelkit";
const PROFILE_ENV: &str = "PEELKIT_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves peelkit's data and config roots from the platform conventions
/// (`dirs`), suffixed with `PEELKIT_PROFILE` when set.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use pk_core::ports::AppDirsPort;
/// use pk_platform::DirsAppDirsAdapter;
///
/// let dirs = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/srv"))
///     .get_app_dirs()
///     .unwrap();
/// assert!(dirs.app_data_root.starts_with("/srv"));
/// ```
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Adapter rooted at the user's platform data and config directories.
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Uses `base` for both the data and config roots.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}
