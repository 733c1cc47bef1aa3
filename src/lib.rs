//! Vibe Ladder - AI competency article with a self-assessment quiz
//!
//! Renders a content-driven article about the ladder from "vibe coder" to AI
//! system architect, scores the reader's self-assessment and drives the
//! page's interactive state one event at a time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
