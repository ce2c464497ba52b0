use thiserror::Error;

/// The host refused or failed a clipboard read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardAccessError {
    #[error("clipboard access denied: {0}")]
    Denied(String),

    #[error("clipboard is empty")]
    Empty,

    #[error("clipboard does not hold text")]
    NotText,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Stored history could not be read back.
///
/// Callers recover by treating history as empty.
#[derive(Debug, Error)]
pub enum PersistenceReadError {
    #[error("history store unreadable: {0}")]
    Io(String),

    #[error("history data malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,
}
