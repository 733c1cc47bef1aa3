//! Theme Store Port - Interface for persisting the reader's theme choice.

use async_trait::async_trait;

use crate::domain::interaction::Theme;

/// Errors that can occur during theme persistence
#[derive(Debug, thiserror::Error)]
pub enum ThemeStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize theme: {0}")]
    SerializationFailed(String),

    #[error("Stored theme is unreadable: {0}")]
    Corrupt(String),
}

/// Port for the single persisted key-value pair holding the theme.
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Load the stored theme.
    ///
    /// # Returns
    /// `None` when nothing has been stored yet.
    ///
    /// # Errors
    /// Returns `ThemeStoreError` if the store exists but cannot be read.
    async fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    /// Persist the theme, replacing any previous value.
    ///
    /// # Errors
    /// Returns `ThemeStoreError` if the write fails.
    async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}
