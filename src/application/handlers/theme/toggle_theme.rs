//! ToggleThemeHandler - Flips the theme and persists the new value.

use std::sync::Arc;

use crate::domain::interaction::Theme;
use crate::ports::{ThemeStore, ThemeStoreError};

/// Command to flip the theme currently shown.
#[derive(Debug, Clone, Copy)]
pub struct ToggleThemeCommand {
    pub current: Theme,
}

pub struct ToggleThemeHandler {
    store: Arc<dyn ThemeStore>,
}

impl ToggleThemeHandler {
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self { store }
    }

    /// Returns the new theme once it has been persisted.
    pub async fn handle(&self, cmd: ToggleThemeCommand) -> Result<Theme, ThemeStoreError> {
        let next = cmd.current.toggled();
        self.store.save(next).await?;
        tracing::debug!(theme = %next, "Theme persisted");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryThemeStore;

    #[tokio::test]
    async fn toggle_flips_and_persists() {
        let store = Arc::new(InMemoryThemeStore::new());
        let handler = ToggleThemeHandler::new(store.clone());

        let next = handler
            .handle(ToggleThemeCommand { current: Theme::Light })
            .await
            .unwrap();

        assert_eq!(next, Theme::Dark);
        assert_eq!(store.stored().await, Some(Theme::Dark));
    }

    #[tokio::test]
    async fn toggling_twice_returns_to_start() {
        let store = Arc::new(InMemoryThemeStore::new());
        let handler = ToggleThemeHandler::new(store.clone());

        let once = handler.handle(ToggleThemeCommand { current: Theme::Dark }).await.unwrap();
        let twice = handler.handle(ToggleThemeCommand { current: once }).await.unwrap();

        assert_eq!(twice, Theme::Dark);
        assert_eq!(store.stored().await, Some(Theme::Dark));
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let handler = ToggleThemeHandler::new(Arc::new(InMemoryThemeStore::failing()));
        assert!(handler
            .handle(ToggleThemeCommand { current: Theme::Light })
            .await
            .is_err());
    }
}
