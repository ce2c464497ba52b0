use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use pk_core::history::ClipHistoryEntry;
use pk_core::ports::{ClipHistoryRepositoryPort, ClipboardReaderPort, ClockPort};

use super::load_history_or_empty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedClip {
    pub entry: ClipHistoryEntry,
    /// history after recording, newest first
    pub history: Vec<ClipHistoryEntry>,
}

/// Use case for reading the system clipboard into history.
///
/// Flow:
/// 1. Read text from the clipboard port
/// 2. Classify it
/// 3. Record it at the front of history (de-duplicated, capped)
/// 4. Persist the new list
pub struct CaptureClipboard {
    clipboard: Arc<dyn ClipboardReaderPort>,
    repo: Arc<dyn ClipHistoryRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    capacity: usize,
}

impl CaptureClipboard {
    pub fn new(
        clipboard: Arc<dyn ClipboardReaderPort>,
        repo: Arc<dyn ClipHistoryRepositoryPort>,
        clock: Arc<dyn ClockPort>,
        capacity: usize,
    ) -> Self {
        Self {
            clipboard,
            repo,
            clock,
            capacity,
        }
    }

    /// # Errors
    ///
    /// A [`pk_core::ports::ClipboardAccessError`] (inside the `anyhow::Error`)
    /// when the clipboard cannot be read; history is not touched in that case.
    /// Save failures are reported with context.
    #[tracing::instrument(name = "usecase.capture_clipboard.execute", skip(self))]
    pub async fn execute(&self) -> Result<CapturedClip> {
        let text = self.clipboard.read_text().await.map_err(|e| {
            warn!(error = %e, "Clipboard read failed");
            e
        })?;

        let entry = ClipHistoryEntry::capture(text, self.clock.now_ms());

        let mut history = load_history_or_empty(self.repo.as_ref(), self.capacity).await;
        history.record(entry.clone());

        self.repo
            .save(history.entries())
            .await
            .context("Failed to persist clipboard history")?;

        info!(
            clip_id = %entry.id,
            kind = %entry.kind,
            history_len = history.len(),
            "Captured clipboard content"
        );

        Ok(CapturedClip {
            entry,
            history: history.into_entries(),
        })
    }
}
