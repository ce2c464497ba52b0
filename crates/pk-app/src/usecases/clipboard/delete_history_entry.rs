use anyhow::{Context, Result};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use pk_core::ids::ClipId;
use pk_core::ports::ClipHistoryRepositoryPort;

use super::load_history_or_empty;

#[derive(Debug, Error)]
#[error("clipboard history entry not found: {0}")]
pub struct HistoryEntryNotFound(pub ClipId);

/// Use case for removing a single clipboard history entry.
pub struct DeleteClipHistoryEntry {
    repo: Arc<dyn ClipHistoryRepositoryPort>,
    capacity: usize,
}

impl DeleteClipHistoryEntry {
    pub fn new(repo: Arc<dyn ClipHistoryRepositoryPort>, capacity: usize) -> Self {
        Self { repo, capacity }
    }

    /// Removes the entry and persists the remaining list.
    ///
    /// # Errors
    ///
    /// [`HistoryEntryNotFound`] (inside the `anyhow::Error`) when no entry has
    /// `id`; otherwise whatever the repository reports on save.
    #[tracing::instrument(
        name = "usecase.delete_clip_history_entry.execute",
        skip(self),
        fields(clip_id = %id)
    )]
    pub async fn execute(&self, id: &ClipId) -> Result<()> {
        let mut history = load_history_or_empty(self.repo.as_ref(), self.capacity).await;

        history
            .remove(id)
            .ok_or_else(|| HistoryEntryNotFound(id.clone()))?;

        self.repo
            .save(history.entries())
            .await
            .context("Failed to persist clipboard history")?;

        info!(clip_id = %id, remaining = history.len(), "Deleted clipboard history entry");
        Ok(())
    }
}
