//! HTTP routes for the page and quiz endpoints.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{evaluate_quiz, get_content, get_page, health, PageAppState};

/// Creates the page router with all routes.
pub fn page_routes(state: PageAppState) -> Router {
    Router::new()
        // GET /
        .route("/", get(get_page))
        // GET /assets/content.json
        .route("/assets/content.json", get(get_content))
        // POST /api/quiz/result
        .route("/api/quiz/result", post(evaluate_quiz))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::html::HtmlPageRenderer;
    use crate::adapters::storage::InMemoryThemeStore;
    use crate::domain::content::ContentStore;
    use crate::domain::foundation::messages::UNKNOWN_QUESTION;
    use crate::domain::interaction::Theme;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn content() -> ContentStore {
        ContentStore::from_json(
            &json!({
                "stats": [{ "value": "$4.5M", "label": "Chi phí", "source": "IBM" }],
                "quiz": {
                    "questions": [
                        { "id": "q1", "text": "t", "detail": "d", "scoring": { "0": "a", "1": "b", "2": "c" } },
                        { "id": "q2", "text": "t", "detail": "d", "scoring": { "0": "a", "1": "b", "2": "c" } },
                        { "id": "q3", "text": "t", "detail": "d", "scoring": { "0": "a", "1": "b", "2": "c" } }
                    ],
                    "personaMapping": {
                        "low_low": { "name": "Explorer", "condition": "c", "upgrade": ["a"] },
                        "low_high": { "name": "Reviewer", "condition": "c", "upgrade": ["b"] },
                        "medium_high": { "name": "Builder", "condition": "c", "upgrade": ["c"] },
                        "high_high": { "name": "Architect", "condition": "c", "upgrade": ["d"] }
                    }
                }
            })
            .to_string(),
        )
        .unwrap()
    }

    fn app(content: Option<ContentStore>, theme: Theme) -> Router {
        page_routes(PageAppState::new(
            content,
            Arc::new(HtmlPageRenderer::new()),
            Arc::new(InMemoryThemeStore::with_theme(theme)),
        ))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn quiz_request(answers: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/quiz/result")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "answers": answers }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn page_renders_with_stored_theme() {
        let response = app(Some(content()), Theme::Dark)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("$4.5M"));
    }

    #[tokio::test]
    async fn page_without_content_is_overlay() {
        let response = app(None, Theme::Light)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_text(response)
            .await
            .contains("Không thể tải nội dung. Vui lòng tải lại trang."));
    }

    #[tokio::test]
    async fn content_document_is_served() {
        let response = app(Some(content()), Theme::Light)
            .oneshot(
                Request::builder()
                    .uri("/assets/content.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["stats"][0]["value"], "$4.5M");
    }

    #[tokio::test]
    async fn complete_quiz_returns_result() {
        let response = app(Some(content()), Theme::Light)
            .oneshot(quiz_request(json!({ "q1": 2, "q2": 1, "q3": 0 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_score"], 3);
        assert_eq!(json["max_score"], 6);
        assert_eq!(json["level"], "L3");
        assert_eq!(json["persona_key"], "medium_high");
        assert_eq!(json["persona"]["name"], "Builder");
        assert!(json["export_text"].as_str().unwrap().starts_with("📊"));
    }

    #[tokio::test]
    async fn incomplete_quiz_is_unprocessable() {
        let response = app(Some(content()), Theme::Light)
            .oneshot(quiz_request(json!({ "q1": 2 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "QUIZ_INCOMPLETE");
        assert_eq!(json["message"], "Vui lòng trả lời tất cả các câu hỏi!");
    }

    #[tokio::test]
    async fn unknown_question_is_unprocessable() {
        let response = app(Some(content()), Theme::Light)
            .oneshot(quiz_request(json!({ "q1": 0, "q2": 0, "q3": 0, "q9": 1 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNKNOWN_QUESTION");
        assert_eq!(json["message"], UNKNOWN_QUESTION);
        assert_eq!(json["details"]["question_id"], "q9");
    }

    #[tokio::test]
    async fn unrepresentable_score_returns_json_error() {
        for score in [json!(300), json!(-1)] {
            let response = app(Some(content()), Theme::Light)
                .oneshot(quiz_request(json!({ "q1": score, "q2": 0, "q3": 0 })))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let json = body_json(response).await;
            assert_eq!(json["code"], "INVALID_FORMAT");
            assert!(!json["message"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn unparseable_body_returns_json_error() {
        let response = app(Some(content()), Theme::Light)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/quiz/result")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"answers\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn quiz_without_content_is_unavailable() {
        let response = app(None, Theme::Light)
            .oneshot(quiz_request(json!({ "q1": 0 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn health_reports_content_state() {
        let response = app(None, Theme::Light)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["content_loaded"], false);
    }
}
