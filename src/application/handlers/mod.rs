//! Command and query handlers.
//!
//! Each handler wraps the ports it needs and is constructed per use case.

pub mod content;
pub mod quiz;
pub mod theme;

pub use content::LoadContentHandler;
pub use quiz::{CopyResultHandler, EvaluateQuizCommand, EvaluateQuizHandler};
pub use theme::{LoadThemeHandler, ToggleThemeCommand, ToggleThemeHandler};
