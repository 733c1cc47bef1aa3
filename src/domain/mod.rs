//! Domain layer containing the article's content model and behaviour.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, errors, copy)
//! - `content` - The content document and its read-only store
//! - `quiz` - Self-assessment scoring and classification
//! - `chart` - Scatter chart coordinate mapping
//! - `interaction` - Theme, navigation, reveal and other UI state

pub mod chart;
pub mod content;
pub mod foundation;
pub mod interaction;
pub mod quiz;
