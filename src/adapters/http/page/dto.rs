//! HTTP DTOs for page and quiz endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::{Persona, PersonaKey};
use crate::domain::foundation::DomainError;
use crate::domain::quiz::{QuizAnswers, QuizResult};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to score a complete answer set.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateQuizRequest {
    /// Question id to chosen score, e.g. `{"q1": 2}`.
    pub answers: QuizAnswers,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Quiz outcome including the ready-to-copy export text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResultResponse {
    pub total_score: u32,
    pub max_score: u32,
    pub level: String,
    pub level_title: String,
    pub persona_key: PersonaKey,
    pub persona: Persona,
    pub export_text: String,
}

impl From<&QuizResult> for QuizResultResponse {
    fn from(result: &QuizResult) -> Self {
        Self {
            total_score: result.total_score,
            max_score: result.max_score,
            level: result.level.label().to_string(),
            level_title: result.level.title().to_string(),
            persona_key: result.persona_key,
            persona: result.persona.clone(),
            export_text: result.export_text(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub content_loaded: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "CONTENT_UNAVAILABLE".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
