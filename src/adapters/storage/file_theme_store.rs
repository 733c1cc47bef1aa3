//! File-based Theme Store Adapter
//!
//! Persists the theme as a one-key JSON object (`{"theme": "dark"}`) inside
//! the configured state directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::interaction::Theme;
use crate::ports::{ThemeStore, ThemeStoreError};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    theme: Theme,
}

/// Theme store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    base_path: PathBuf,
}

impl FileThemeStore {
    /// Create a store rooted at `base_path`.
    ///
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.base_path.join(PREFERENCES_FILE)
    }
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let raw = match fs::read_to_string(self.file_path()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ThemeStoreError::Io(e.to_string())),
        };

        let stored: StoredPreferences =
            serde_json::from_str(&raw).map_err(|e| ThemeStoreError::Corrupt(e.to_string()))?;
        Ok(Some(stored.theme))
    }

    async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ThemeStoreError::Io(e.to_string()))?;

        let json = serde_json::to_string(&StoredPreferences { theme })
            .map_err(|e| ThemeStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.file_path(), json)
            .await
            .map_err(|e| ThemeStoreError::Io(e.to_string()))?;

        tracing::debug!(theme = %theme, path = %self.file_path().display(), "Theme persisted");
        Ok(())
    }
}
