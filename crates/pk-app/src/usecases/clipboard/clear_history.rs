use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use pk_core::ports::ClipHistoryRepositoryPort;

/// Use case for wiping all clipboard history.
pub struct ClearClipHistory {
    repo: Arc<dyn ClipHistoryRepositoryPort>,
}

impl ClearClipHistory {
    pub fn new(repo: Arc<dyn ClipHistoryRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.clear_clip_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<()> {
        self.repo
            .clear()
            .await
            .context("Failed to clear clipboard history")?;
        info!("Clipboard history cleared");
        Ok(())
    }
}
