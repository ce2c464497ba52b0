use async_trait::async_trait;

use super::errors::ClipboardAccessError;

/// Read access to the host clipboard.
///
/// Implementations talk to the OS and may block; adapters are expected to
/// move that work off the async executor.
#[async_trait]
pub trait ClipboardReaderPort: Send + Sync {
    /// Current clipboard text. Empty text is reported as
    /// [`ClipboardAccessError::Empty`] rather than `Ok("")`.
    async fn read_text(&self) -> Result<String, ClipboardAccessError>;
}
