//! Content Source Port - Interface for loading the article document.
//!
//! The page cannot render anything until the document is loaded, so this is
//! the first port exercised at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentDocument;

/// Fixed relative path of the content document.
pub const CONTENT_PATH: &str = "assets/content.json";

/// Errors that can occur while loading content
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Content not found at {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Content request returned status {0}")]
    Status(u16),

    #[error("Invalid content document: {0}")]
    InvalidDocument(String),
}

impl From<serde_json::Error> for ContentLoadError {
    fn from(error: serde_json::Error) -> Self {
        ContentLoadError::InvalidDocument(error.to_string())
    }
}

/// Port for loading the content document.
///
/// # Contract
///
/// Implementations must:
/// - Perform a single load attempt per call, with no retry
/// - Report malformed JSON as [`ContentLoadError::InvalidDocument`]
/// - Never return a partially parsed document
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load and parse the content document.
    ///
    /// # Errors
    ///
    /// Returns `ContentLoadError` if the document cannot be read or parsed.
    async fn load(&self) -> Result<ContentDocument, ContentLoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_invalid_document() {
        let err = serde_json::from_str::<ContentDocument>("[").unwrap_err();
        let mapped: ContentLoadError = err.into();
        assert!(matches!(mapped, ContentLoadError::InvalidDocument(_)));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            ContentLoadError::Status(404).to_string(),
            "Content request returned status 404"
        );
    }
}
