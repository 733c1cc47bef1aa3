//! File-based Content Source Adapter
//!
//! Reads the content document from the local filesystem.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::content::ContentDocument;
use crate::ports::{ContentLoadError, ContentSource};

/// Loads `content.json` from disk.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentLoadError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentLoadError::NotFound(self.describe()),
            _ => ContentLoadError::Io(e.to_string()),
        })?;

        let document = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "Content file read");
        Ok(document)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{"conclusion": {"takeaways": ["one"]}}"#).unwrap();

        let document = FileContentSource::new(&path).load().await.unwrap();
        assert_eq!(document.takeaways().unwrap(), ["one".to_string()]);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = FileContentSource::new(dir.path().join("absent.json"));

        assert!(matches!(source.load().await, Err(ContentLoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ \"stats\": [").unwrap();

        let result = FileContentSource::new(&path).load().await;
        assert!(matches!(result, Err(ContentLoadError::InvalidDocument(_))));
    }
}
