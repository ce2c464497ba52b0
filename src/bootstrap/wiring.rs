//! # Dependency Injection
//!
//! The only place that depends on pk-infra, pk-platform and pk-app at the
//! same time. Assembly only: no decisions beyond picking adapters.

use std::sync::Arc;

use pk_app::{CaptureClipboard, ClearClipHistory, DeleteClipHistoryEntry, ListClipHistory};
use pk_core::config::AppConfig;
use pk_core::ports::{ClipHistoryRepositoryPort, ClipboardReaderPort, ClockPort};
use pk_infra::{FileKeyValueStore, KvClipHistoryRepository, SystemClock};
use pk_platform::SystemClipboardReader;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("no history store path configured and no platform data directory available")]
    StorePathUnavailable,
}

/// Port implementations shared by the clipboard use cases.
pub struct AppDeps {
    pub clipboard: Arc<dyn ClipboardReaderPort>,
    pub history_repo: Arc<dyn ClipHistoryRepositoryPort>,
    pub clock: Arc<dyn ClockPort>,
    pub history_capacity: usize,
}

impl AppDeps {
    pub fn capture_clipboard(&self) -> CaptureClipboard {
        CaptureClipboard::new(
            self.clipboard.clone(),
            self.history_repo.clone(),
            self.clock.clone(),
            self.history_capacity,
        )
    }

    pub fn list_history(&self) -> ListClipHistory {
        ListClipHistory::new(self.history_repo.clone(), self.history_capacity)
    }

    pub fn delete_history_entry(&self) -> DeleteClipHistoryEntry {
        DeleteClipHistoryEntry::new(self.history_repo.clone(), self.history_capacity)
    }

    pub fn clear_history(&self) -> ClearClipHistory {
        ClearClipHistory::new(self.history_repo.clone())
    }
}

pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    if config.store_path.as_os_str().is_empty() {
        return Err(WiringError::StorePathUnavailable);
    }

    let store = Arc::new(FileKeyValueStore::new(config.store_path.clone()));
    tracing::debug!(store = %config.store_path.display(), "history store wired");

    Ok(AppDeps {
        clipboard: Arc::new(SystemClipboardReader::new()),
        history_repo: Arc::new(KvClipHistoryRepository::new(store)),
        clock: Arc::new(SystemClock),
        history_capacity: config.history_max_entries,
    })
}
