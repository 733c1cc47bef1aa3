//! File Clipboard Adapter
//!
//! Writes exported text to a file. Used by the command line, where there is
//! no system clipboard to talk to.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{Clipboard, ClipboardError};

#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text)
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{}: {}", self.path.display(), e)))
    }
}
