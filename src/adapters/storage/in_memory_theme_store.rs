//! In-Memory Theme Store Adapter
//!
//! Keeps the theme in memory. Useful for tests and for serving pages
//! without touching disk.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::interaction::Theme;
use crate::ports::{ThemeStore, ThemeStoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeStore {
    theme: Arc<RwLock<Option<Theme>>>,
    fail_writes: bool,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Arc::new(RwLock::new(Some(theme))),
            fail_writes: false,
        }
    }

    /// Store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            theme: Arc::default(),
            fail_writes: true,
        }
    }

    /// Currently stored theme (useful for tests)
    pub async fn stored(&self) -> Option<Theme> {
        *self.theme.read().await
    }
}

#[async_trait]
impl ThemeStore for InMemoryThemeStore {
    async fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(*self.theme.read().await)
    }

    async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if self.fail_writes {
            return Err(ThemeStoreError::Io("storage is read-only".to_string()));
        }
        *self.theme.write().await = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_loads_none() {
        assert_eq!(InMemoryThemeStore::new().load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_replaces_value() {
        let store = InMemoryThemeStore::with_theme(Theme::Light);
        store.save(Theme::Dark).await.unwrap();
        assert_eq!(store.stored().await, Some(Theme::Dark));
    }

    #[tokio::test]
    async fn failing_store_rejects_writes() {
        let store = InMemoryThemeStore::failing();
        assert!(store.save(Theme::Dark).await.is_err());
        assert_eq!(store.stored().await, None);
    }
}
