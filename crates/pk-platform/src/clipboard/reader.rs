use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tokio::task::spawn_blocking;
use tracing::debug;

use pk_core::ports::{ClipboardAccessError, ClipboardReaderPort};

type PlatformError = Box<dyn std::error::Error + Send + Sync>;

/// Reads text from the OS clipboard through `clipboard-rs`.
///
/// A fresh context is opened per read on the blocking thread pool; the
/// platform handle is not `Send` on every target and some backends wait on
/// the display server.
///
/// # Examples
///
/// ```no_run
/// use pk_core::ports::ClipboardReaderPort;
/// use pk_platform::SystemClipboardReader;
///
/// # async fn demo() -> Result<(), pk_core::ports::ClipboardAccessError> {
/// let text = SystemClipboardReader::new().read_text().await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboardReader;

impl SystemClipboardReader {
    /// Creates a reader. No OS resources are held until [`read_text`] runs.
    ///
    /// [`read_text`]: ClipboardReaderPort::read_text
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardReaderPort for SystemClipboardReader {
    /// # Returns
    ///
    /// The clipboard text, never empty.
    ///
    /// # Errors
    ///
    /// - [`ClipboardAccessError::Empty`] when the clipboard holds nothing
    /// - [`ClipboardAccessError::NotText`] when it holds only non-text formats
    /// - [`ClipboardAccessError::Denied`] when the OS refuses access
    /// - [`ClipboardAccessError::Unavailable`] for any other platform failure
    async fn read_text(&self) -> Result<String, ClipboardAccessError> {
        run_blocking(read_text_blocking).await
    }
}

async fn run_blocking<F>(read: F) -> Result<String, ClipboardAccessError>
where
    F: FnOnce() -> Result<String, ClipboardAccessError> + Send + 'static,
{
    spawn_blocking(read)
        .await
        .map_err(|e| ClipboardAccessError::Unavailable(format!("clipboard task failed: {e}")))?
}

fn read_text_blocking() -> Result<String, ClipboardAccessError> {
    let ctx = ClipboardContext::new().map_err(map_open_err)?;

    if !ctx.has(ContentFormat::Text) {
        let formats = ctx.available_formats().unwrap_or_default();
        debug!(formats = formats.len(), "clipboard holds no text");
        return Err(if formats.is_empty() {
            ClipboardAccessError::Empty
        } else {
            ClipboardAccessError::NotText
        });
    }

    text_or_empty(ctx.get_text())
}

fn map_open_err(e: PlatformError) -> ClipboardAccessError {
    let msg = e.to_string();
    let lowered = msg.to_ascii_lowercase();
    if lowered.contains("denied") || lowered.contains("permission") {
        ClipboardAccessError::Denied(msg)
    } else {
        ClipboardAccessError::Unavailable(msg)
    }
}

fn text_or_empty(result: Result<String, PlatformError>) -> Result<String, ClipboardAccessError> {
    match result {
        Ok(text) if text.is_empty() => Err(ClipboardAccessError::Empty),
        Ok(text) => Ok(text),
        Err(e) => Err(map_open_err(e)),
    }
}
