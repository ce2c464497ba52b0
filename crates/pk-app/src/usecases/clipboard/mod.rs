mod capture_clipboard;
mod clear_history;
mod delete_history_entry;
mod list_history;

pub use capture_clipboard::{CaptureClipboard, CapturedClip};
pub use clear_history::ClearClipHistory;
pub use delete_history_entry::{DeleteClipHistoryEntry, HistoryEntryNotFound};
pub use list_history::ListClipHistory;

use pk_core::history::ClipHistory;
use pk_core::ports::ClipHistoryRepositoryPort;
use tracing::warn;

/// Loads stored history, substituting an empty one when the store is unreadable.
pub(crate) async fn load_history_or_empty(
    repo: &dyn ClipHistoryRepositoryPort,
    capacity: usize,
) -> ClipHistory {
    match repo.load().await {
        Ok(entries) => ClipHistory::from_entries(entries, capacity),
        Err(e) => {
            warn!(error = %e, "clipboard history unreadable, starting empty");
            ClipHistory::with_capacity(capacity)
        }
    }
}
