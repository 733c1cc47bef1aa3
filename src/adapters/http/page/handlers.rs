//! HTTP handlers for the page, the content document and quiz scoring.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

use crate::application::handlers::{EvaluateQuizCommand, EvaluateQuizHandler, LoadThemeHandler};
use crate::domain::content::{ContentDocument, ContentStore};
use crate::domain::foundation::messages::CONTENT_LOAD_FAILED;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PageRenderer, PageView, ThemeStore};

use super::dto::{ErrorResponse, EvaluateQuizRequest, HealthResponse, QuizResultResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Page API error that implements IntoResponse.
#[derive(Debug)]
pub enum PageApiError {
    /// Rejected quiz submission.
    Validation(DomainError),
    /// Request body that could not be parsed into the expected shape.
    MalformedBody(JsonRejection),
    NotFound(String),
    ContentUnavailable,
    Internal(String),
}

impl IntoResponse for PageApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            PageApiError::Validation(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::from(&err))
            }
            PageApiError::MalformedBody(rejection) => (
                rejection.status(),
                ErrorResponse::from(&DomainError::new(
                    ErrorCode::InvalidFormat,
                    rejection.body_text(),
                )),
            ),
            PageApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            PageApiError::ContentUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::unavailable(CONTENT_LOAD_FAILED),
            ),
            PageApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for PageApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::InvalidFormat
            | ErrorCode::QuizIncomplete
            | ErrorCode::UnknownQuestion
            | ErrorCode::ScoreNotOffered => PageApiError::Validation(error),
            ErrorCode::QuizUnavailable => PageApiError::NotFound(error.message),
            ErrorCode::PersonaMissing => PageApiError::Internal(error.message),
        }
    }
}

impl From<JsonRejection> for PageApiError {
    fn from(rejection: JsonRejection) -> Self {
        PageApiError::MalformedBody(rejection)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state: the immutable content store plus the renderer and theme
/// store ports. `content` is `None` when the startup load failed.
#[derive(Clone)]
pub struct PageAppState {
    pub content: Option<ContentStore>,
    pub renderer: Arc<dyn PageRenderer>,
    pub theme_store: Arc<dyn ThemeStore>,
}

impl PageAppState {
    pub fn new(
        content: Option<ContentStore>,
        renderer: Arc<dyn PageRenderer>,
        theme_store: Arc<dyn ThemeStore>,
    ) -> Self {
        Self {
            content,
            renderer,
            theme_store,
        }
    }

    fn content(&self) -> Result<&ContentStore, PageApiError> {
        self.content.as_ref().ok_or(PageApiError::ContentUnavailable)
    }

    pub fn evaluate_quiz_handler(&self) -> Result<EvaluateQuizHandler, PageApiError> {
        Ok(EvaluateQuizHandler::new(self.content()?.clone()))
    }

    pub fn load_theme_handler(&self) -> LoadThemeHandler {
        LoadThemeHandler::new(self.theme_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
///
/// Full page, or the blocking overlay with 503 when content is missing.
pub async fn get_page(State(state): State<PageAppState>) -> Response {
    let Some(content) = &state.content else {
        let html = state.renderer.render_error_page(CONTENT_LOAD_FAILED);
        return (StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response();
    };

    let view = PageView {
        theme: state.load_theme_handler().handle().await,
        ..PageView::default()
    };
    Html(state.renderer.render_page(content.document(), &view)).into_response()
}

/// GET /assets/content.json
pub async fn get_content(
    State(state): State<PageAppState>,
) -> Result<Json<ContentDocument>, PageApiError> {
    Ok(Json(state.content()?.document().clone()))
}

/// POST /api/quiz/result
pub async fn evaluate_quiz(
    State(state): State<PageAppState>,
    payload: Result<Json<EvaluateQuizRequest>, JsonRejection>,
) -> Result<Json<QuizResultResponse>, PageApiError> {
    let Json(request) = payload?;
    let handler = state.evaluate_quiz_handler()?;
    let result = handler.handle(EvaluateQuizCommand {
        answers: request.answers,
    })?;
    Ok(Json(QuizResultResponse::from(&result)))
}

/// GET /health
pub async fn health(State(state): State<PageAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        content_loaded: state.content.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_validation_codes_map_to_validation() {
        let err = PageApiError::from(DomainError::new(ErrorCode::QuizIncomplete, "m"));
        assert!(matches!(err, PageApiError::Validation(_)));
    }

    #[test]
    fn missing_quiz_maps_to_not_found() {
        let err = PageApiError::from(DomainError::new(ErrorCode::QuizUnavailable, "none"));
        assert!(matches!(err, PageApiError::NotFound(m) if m == "none"));
    }

    #[test]
    fn missing_persona_is_internal() {
        let err = PageApiError::from(DomainError::new(ErrorCode::PersonaMissing, "p"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
