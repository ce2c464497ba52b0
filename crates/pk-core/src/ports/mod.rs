//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. Core code depends only on these
//! traits; file storage, the system clipboard and platform directories
//! are provided by `pk-infra` and `pk-platform`.

pub mod app_dirs;
pub mod clipboard;
mod clock;
pub mod errors;
pub mod history;
pub mod kv_store;

pub use app_dirs::{AppDirs, AppDirsPort};
pub use clipboard::ClipboardReaderPort;
pub use clock::*;
pub use errors::{AppDirsError, ClipboardAccessError, PersistenceReadError};
pub use history::ClipHistoryRepositoryPort;
pub use kv_store::KeyValueStorePort;
