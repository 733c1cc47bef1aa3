//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors
    InvalidFormat,

    // Quiz errors
    QuizIncomplete,
    UnknownQuestion,
    ScoreNotOffered,
    PersonaMissing,
    QuizUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::QuizIncomplete => "QUIZ_INCOMPLETE",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::ScoreNotOffered => "SCORE_NOT_OFFERED",
            ErrorCode::PersonaMissing => "PERSONA_MISSING",
            ErrorCode::QuizUnavailable => "QUIZ_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("agency", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'agency' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_out_of_range_keeps_fraction() {
        let err = ValidationError::out_of_range("agency", 0.0, 100.0, 100.5);
        assert_eq!(
            format!("{}", err),
            "Field 'agency' must be between 0 and 100, got 100.5"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::QuizIncomplete, "Answer every question");
        assert_eq!(format!("{}", err), "[QUIZ_INCOMPLETE] Answer every question");
    }

    #[test]
    fn domain_error_with_detail_records_pair() {
        let err = DomainError::new(ErrorCode::ScoreNotOffered, "m").with_detail("score", "7");
        assert_eq!(err.details.get("score"), Some(&"7".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ScoreNotOffered), "SCORE_NOT_OFFERED");
        assert_eq!(format!("{}", ErrorCode::InvalidFormat), "INVALID_FORMAT");
    }
}
