use std::path::PathBuf;

use super::errors::AppDirsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

impl AppDirs {
    pub fn store_path(&self) -> PathBuf {
        self.app_data_root.join("store.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_config_root.join("config.toml")
    }
}

pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
