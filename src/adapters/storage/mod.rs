//! Storage Adapters
//!
//! Implementations of the ThemeStore port for persisting the theme choice.
//!
//! ## Available Adapters
//!
//! - **FileThemeStore** - Stores the theme as a JSON file on disk
//! - **InMemoryThemeStore** - Stores the theme in memory (testing/serving)

mod file_theme_store;
mod in_memory_theme_store;

pub use file_theme_store::FileThemeStore;
pub use in_memory_theme_store::InMemoryThemeStore;
