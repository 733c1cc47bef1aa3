//! Content store - read-only holder of the loaded document.

use std::sync::Arc;

use super::document::ContentDocument;
use super::quiz::QuizDefinition;

/// Shared, immutable handle to the content document.
///
/// Cloning is cheap; every clone points at the same document, which is
/// never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    document: Arc<ContentDocument>,
}

impl ContentStore {
    pub fn new(document: ContentDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    /// Parses a JSON payload into a store.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ContentDocument>(raw).map(Self::new)
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn quiz(&self) -> Option<&QuizDefinition> {
        self.document.quiz.as_ref()
    }
}

impl From<ContentDocument> for ContentStore {
    fn from(document: ContentDocument) -> Self {
        Self::new(document)
    }
}
