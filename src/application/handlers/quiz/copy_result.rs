//! CopyResultHandler - Exports a quiz result to the clipboard.

use std::sync::Arc;

use crate::domain::quiz::QuizResult;
use crate::ports::{Clipboard, ClipboardError};

/// Writes the result's export text to the primary clipboard, falling back to
/// the secondary one when the primary refuses.
///
/// The result is only borrowed; a failed copy leaves it intact so the text
/// can be regenerated on the next attempt.
pub struct CopyResultHandler {
    primary: Arc<dyn Clipboard>,
    fallback: Option<Arc<dyn Clipboard>>,
}

impl CopyResultHandler {
    pub fn new(primary: Arc<dyn Clipboard>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn Clipboard>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub async fn handle(&self, result: &QuizResult) -> Result<(), ClipboardError> {
        let text = result.export_text();

        let primary_error = match self.primary.write_text(&text).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            tracing::warn!(error = %primary_error, "Clipboard write failed");
            return Err(primary_error);
        };

        tracing::debug!(error = %primary_error, "Primary clipboard failed, using fallback");
        fallback.write_text(&text).await.map_err(|e| {
            tracing::warn!(error = %e, "Fallback clipboard write failed");
            e
        })
    }
}
