//! LoadContentHandler - Query handler for the one-time content load.

use std::sync::Arc;

use crate::domain::content::ContentStore;
use crate::ports::{ContentLoadError, ContentSource};

/// Handler that fetches and parses the content document once.
///
/// No retry: a failure is reported to the caller, which shows the blocking
/// overlay instead of a partial page.
pub struct LoadContentHandler {
    source: Arc<dyn ContentSource>,
}

impl LoadContentHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<ContentStore, ContentLoadError> {
        match self.source.load().await {
            Ok(document) => {
                tracing::info!(
                    source = %self.source.describe(),
                    questions = document.quiz.as_ref().map(|q| q.questions.len()).unwrap_or(0),
                    "Content loaded"
                );
                Ok(ContentStore::new(document))
            }
            Err(e) => {
                tracing::error!(source = %self.source.describe(), error = %e, "Content load failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentDocument, Stat};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockContentSource {
        document: Option<ContentDocument>,
        calls: AtomicUsize,
    }

    impl MockContentSource {
        fn with_document(document: ContentDocument) -> Self {
            Self {
                document: Some(document),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                document: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentSource for MockContentSource {
        async fn load(&self) -> Result<ContentDocument, ContentLoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.document
                .clone()
                .ok_or_else(|| ContentLoadError::Network("connection refused".to_string()))
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    #[tokio::test]
    async fn returns_store_for_loaded_document() {
        let document = ContentDocument {
            stats: Some(vec![Stat {
                value: "$4.5M".to_string(),
                label: "l".to_string(),
                source: "s".to_string(),
            }]),
            ..ContentDocument::default()
        };
        let handler = LoadContentHandler::new(Arc::new(MockContentSource::with_document(
            document.clone(),
        )));

        let store = handler.handle().await.unwrap();
        assert_eq!(store.document(), &document);
    }

    #[tokio::test]
    async fn failure_is_reported_without_retry() {
        let source = Arc::new(MockContentSource::failing());
        let handler = LoadContentHandler::new(source.clone());

        let result = handler.handle().await;
        assert!(matches!(result, Err(ContentLoadError::Network(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
