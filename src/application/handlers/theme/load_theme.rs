//! LoadThemeHandler - Reads the persisted theme at startup.

use std::sync::Arc;

use crate::domain::interaction::Theme;
use crate::ports::ThemeStore;

pub struct LoadThemeHandler {
    store: Arc<dyn ThemeStore>,
}

impl LoadThemeHandler {
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Theme {
        match self.store.load().await {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored theme unreadable, using default");
                Theme::default()
            }
        }
    }
}
