//! Clipboard Port - Interface for exporting text to the reader's clipboard.

use async_trait::async_trait;

/// Errors that can occur during a clipboard write
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Port for writing plain text to a clipboard.
///
/// The session holds a primary clipboard and a fallback; the fallback is
/// only tried when the primary fails.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Write `text` to the clipboard.
    ///
    /// # Errors
    /// Returns `ClipboardError` if the write was not accepted.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
