//! Local device key-value storage port.

use anyhow::Result;
use async_trait::async_trait;

/// String-keyed, string-valued local storage.
///
/// Values are opaque to the store; callers own serialization.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}
