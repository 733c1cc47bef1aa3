//! In-Memory Clipboard Adapter
//!
//! Holds the last written text. Can be constructed unavailable to exercise
//! the fallback path.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{Clipboard, ClipboardError};

#[derive(Debug, Clone)]
pub struct InMemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
    available: bool,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: Arc::default(),
            available: true,
        }
    }

    /// Clipboard that rejects every write.
    pub fn unavailable() -> Self {
        Self {
            contents: Arc::default(),
            available: false,
        }
    }

    /// Last text written, if any.
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::Unavailable);
        }
        *self.contents.write().await = Some(text.to_string());
        Ok(())
    }
}
