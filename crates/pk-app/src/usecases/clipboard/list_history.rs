use std::sync::Arc;

use pk_core::history::ClipHistoryEntry;
use pk_core::ports::ClipHistoryRepositoryPort;

use super::load_history_or_empty;

/// Use case for listing clipboard history, newest first.
pub struct ListClipHistory {
    repo: Arc<dyn ClipHistoryRepositoryPort>,
    capacity: usize,
}

impl ListClipHistory {
    pub fn new(repo: Arc<dyn ClipHistoryRepositoryPort>, capacity: usize) -> Self {
        Self { repo, capacity }
    }

    /// Never fails: an unreadable store lists as empty.
    #[tracing::instrument(name = "usecase.list_clip_history.execute", skip(self))]
    pub async fn execute(&self) -> Vec<ClipHistoryEntry> {
        load_history_or_empty(self.repo.as_ref(), self.capacity)
            .await
            .into_entries()
    }
}
