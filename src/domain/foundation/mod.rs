//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types, the view-state machine trait and
//! user-facing copy that form the vocabulary of the article domain.

mod errors;
pub mod messages;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
