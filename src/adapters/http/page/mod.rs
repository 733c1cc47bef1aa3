//! Page HTTP adapter module.
//!
//! Serves the rendered article, its content document and stateless quiz
//! scoring.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, EvaluateQuizRequest, HealthResponse, QuizResultResponse};
pub use handlers::{PageApiError, PageAppState};
pub use routes::page_routes;
