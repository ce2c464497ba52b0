use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use pk_core::ports::KeyValueStorePort;

/// Key-value store persisted as one JSON object file.
///
/// Writes go through a temp file and rename, so the file on disk is always
/// either the previous map or the complete new one. A file that does not
/// hold a JSON object fails reads but is replaced by the next write.
///
/// # Examples
///
/// ```
/// use pk_core::ports::KeyValueStorePort;
/// use pk_infra::FileKeyValueStore;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let store = FileKeyValueStore::new(dir.path().join("store.json"));
///
/// store.set("theme", "dark").await?;
/// assert_eq!(store.get("theme").await?, Some("dark".to_string()));
///
/// store.remove("theme").await?;
/// assert_eq!(store.get("theme").await?, None);
/// # Ok(())
/// # }
/// ```
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first write; the parent
    /// directory is created then if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// # Returns
    ///
    /// The backing file path as given to [`FileKeyValueStore::new`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_content(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(s) if s.trim().is_empty() => Ok(None),
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("read store failed: {}", self.path.display()))
            }
        }
    }

    async fn read_map(&self) -> Result<Map<String, Value>> {
        let Some(content) = self.read_content().await? else {
            return Ok(Map::new());
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse store failed: {}", self.path.display()))
    }

    /// Map to modify before a write.
    ///
    /// A file that is not a JSON object is discarded instead of blocking
    /// every later write; the returned flag is `true` in that case so the
    /// caller rewrites the file even when it has nothing else to change.
    async fn read_map_for_write(&self) -> Result<(Map<String, Value>, bool)> {
        let Some(content) = self.read_content().await? else {
            return Ok((Map::new(), false));
        };

        match serde_json::from_str(&content) {
            Ok(map) => Ok((map, false)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "store file is not a JSON object, replacing it"
                );
                Ok((Map::new(), true))
            }
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, map: &Map<String, Value>) -> Result<()> {
        self.ensure_parent_dir().await?;

        let content = serde_json::to_string_pretty(map).context("serialize store failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    /// # Returns
    ///
    /// `None` when the key, or the file itself, is absent. A blank file
    /// counts as an empty map.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a JSON object.
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map().await?;
        Ok(map.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    /// # Errors
    ///
    /// Fails when the parent directory, temp file, or rename cannot be
    /// written.
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, _) = self.read_map_for_write().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.atomic_write(&map).await?;
        debug!(key, bytes = value.len(), "store key written");
        Ok(())
    }

    /// Removing a missing key is a no-op unless the file held malformed
    /// content, in which case it is rewritten as an empty map.
    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, reset) = self.read_map_for_write().await?;
        let removed = map.remove(key).is_some();
        if removed || reset {
            self.atomic_write(&map).await?;
            debug!(key, removed, "store key removed");
        }
        Ok(())
    }
}
