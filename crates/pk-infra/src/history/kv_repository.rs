//! Clipboard history stored as a JSON array under a single store key.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use pk_core::history::ClipHistoryEntry;
use pk_core::ports::{ClipHistoryRepositoryPort, KeyValueStorePort, PersistenceReadError};

/// Store key holding the serialized history array.
pub const CLIPBOARD_HISTORY_KEY: &str = "clipboard-history";

/// [`ClipHistoryRepositoryPort`] over any [`KeyValueStorePort`].
///
/// Entries are kept newest first exactly as saved; capping and
/// de-duplication happen in the domain before [`save`] is called.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pk_core::detect::DetectedType;
/// use pk_core::history::ClipHistoryEntry;
/// use pk_core::ports::ClipHistoryRepositoryPort;
/// use pk_infra::{InMemoryKeyValueStore, KvClipHistoryRepository};
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let repo = KvClipHistoryRepository::new(Arc::new(InMemoryKeyValueStore::new()));
///
/// let entry = ClipHistoryEntry::new("aGk=", DetectedType::Base64, 1);
/// repo.save(&[entry.clone()]).await?;
/// assert_eq!(repo.load().await?, vec![entry]);
/// # Ok(())
/// # }
/// ```
///
/// [`save`]: ClipHistoryRepositoryPort::save
pub struct KvClipHistoryRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl KvClipHistoryRepository {
    /// Repository writing under [`CLIPBOARD_HISTORY_KEY`] in `store`.
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClipHistoryRepositoryPort for KvClipHistoryRepository {
    /// # Returns
    ///
    /// The saved entries, or an empty list when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// [`PersistenceReadError::Io`] when the store cannot be read and
    /// [`PersistenceReadError::Malformed`] when the stored value is not a
    /// history array.
    async fn load(&self) -> Result<Vec<ClipHistoryEntry>, PersistenceReadError> {
        let raw = self
            .store
            .get(CLIPBOARD_HISTORY_KEY)
            .await
            .map_err(|e| PersistenceReadError::Io(format!("{e:#}")))?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) => Ok(serde_json::from_str(&json)?),
        }
    }

    async fn save(&self, entries: &[ClipHistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(entries).context("serialize clipboard history failed")?;
        self.store.set(CLIPBOARD_HISTORY_KEY, &json).await
    }

    /// Drops the history key. Other keys in the store are kept.
    async fn clear(&self) -> Result<()> {
        self.store.remove(CLIPBOARD_HISTORY_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKeyValueStore;
    use pk_core::detect::DetectedType;

    fn repo() -> (Arc<InMemoryKeyValueStore>, KvClipHistoryRepository) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = KvClipHistoryRepository::new(store.clone());
        (store, repo)
    }

    #[tokio::test]
    async fn test_load_empty_when_never_saved() {
        let (_, repo) = repo();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let (_, repo) = repo();
        let entries = vec![
            ClipHistoryEntry::new("newest", DetectedType::PlainText, 2),
            ClipHistoryEntry::new("{}", DetectedType::Json, 1),
        ];

        repo.save(&entries).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), entries);
    }

    #[tokio::test]
    async fn test_stored_format_uses_type_field() {
        let (store, repo) = repo();
        repo.save(&[ClipHistoryEntry::new("{}", DetectedType::Json, 7)])
            .await
            .unwrap();

        let raw = store.get(CLIPBOARD_HISTORY_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["type"], "JSON");
        assert_eq!(value[0]["timestamp"], 7);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_read_error() {
        let (store, repo) = repo();
        store.set(CLIPBOARD_HISTORY_KEY, "[{\"id\":").await.unwrap();

        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, PersistenceReadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_clear_removes_key() {
        let (store, repo) = repo();
        repo.save(&[ClipHistoryEntry::new("x", DetectedType::PlainText, 1)])
            .await
            .unwrap();

        repo.clear().await.unwrap();

        assert_eq!(store.get(CLIPBOARD_HISTORY_KEY).await.unwrap(), None);
    }
}
