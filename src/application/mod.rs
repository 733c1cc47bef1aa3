//! Application layer - Handlers and the page session.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Stateless handlers serve the HTTP surface; the `PageSession` owns the
//! state of one interactive reader.

pub mod handlers;
pub mod session;

pub use handlers::{
    CopyResultHandler, EvaluateQuizCommand, EvaluateQuizHandler, LoadContentHandler,
    LoadThemeHandler, ToggleThemeCommand, ToggleThemeHandler,
};
pub use session::{PageEvent, PageSession, PageUpdate, SessionOptions, SessionPorts};
