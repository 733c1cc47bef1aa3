//! Adapters - Implementations of port interfaces.
//!
//! - `content` - File and HTTP content sources
//! - `storage` - Theme persistence
//! - `clipboard` - Plain-text export targets
//! - `html` - Markup renderer
//! - `http` - axum endpoints serving the page and quiz scoring

pub mod clipboard;
pub mod content;
pub mod html;
pub mod http;
pub mod storage;
