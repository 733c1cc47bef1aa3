//! Theme handlers.
//!
//! Reading never fails: a missing or unreadable stored value means the
//! default light theme. Toggling flips the current theme and persists it.

mod load_theme;
mod toggle_theme;

pub use load_theme::LoadThemeHandler;
pub use toggle_theme::{ToggleThemeCommand, ToggleThemeHandler};
