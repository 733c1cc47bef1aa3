//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentSource` - Loads the content document (file, HTTP)
//! - `ThemeStore` - Persists the reader's theme choice
//! - `Clipboard` - Exports plain text (primary + fallback)
//! - `PageRenderer` - Turns content and view state into markup

mod clipboard;
mod content_source;
mod page_renderer;
mod theme_store;

pub use clipboard::{Clipboard, ClipboardError};
pub use content_source::{ContentLoadError, ContentSource, CONTENT_PATH};
pub use page_renderer::{Fragment, MountPoint, PageRenderer, PageView, QuizView, Section};
pub use theme_store::{ThemeStore, ThemeStoreError};
