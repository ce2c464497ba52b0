use anyhow::Result;
use async_trait::async_trait;

use super::errors::PersistenceReadError;
use crate::history::ClipHistoryEntry;

/// Persistence for the clipboard history list.
#[async_trait]
pub trait ClipHistoryRepositoryPort: Send + Sync {
    /// Stored entries, newest first. `Ok(vec![])` when nothing was ever saved.
    async fn load(&self) -> Result<Vec<ClipHistoryEntry>, PersistenceReadError>;

    async fn save(&self, entries: &[ClipHistoryEntry]) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

