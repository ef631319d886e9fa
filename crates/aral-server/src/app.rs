//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route(
            "/api/generate-lesson",
            post(handlers::lessons::generate_lesson),
        )
        .route("/api/save-lesson", post(handlers::lessons::save_lesson))
        .route("/health", get(handlers::health::health));

    // Static files for the lesson form
    let router = Router::new()
        .merge(api_routes)
        .merge(static_files::static_router());

    // Add security headers middleware
    router
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use aral_model::{MockModelClient, ModelClient, ModelError};
    use aral_renderer::TableRenderer;

    use super::*;

    const SAMPLE_TABLE: &str = "| Lesson Part | Brief Description |\n\
                                | --- | --- |\n\
                                | Drill | Quick recall warm-up. |\n\
                                | Review | Revisit the last lesson. |";

    fn state_with_model(model: Arc<dyn ModelClient>) -> Arc<AppState> {
        Arc::new(AppState {
            model: Some(model),
            renderer: TableRenderer::new(),
            version: "0.0.0-test".to_string(),
        })
    }

    fn state_without_model() -> Arc<AppState> {
        Arc::new(AppState {
            model: None,
            renderer: TableRenderer::new(),
            version: "0.0.0-test".to_string(),
        })
    }

    async fn post_json(state: Arc<AppState>, uri: &str, body: serde_json::Value) -> Response {
        let app = create_router(state);
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_uri(state: Arc<AppState>, uri: &str) -> Response {
        let app = create_router(state);
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 1_048_576).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_lesson_renders_table() {
        let state = state_with_model(Arc::new(
            MockModelClient::new().with_response(SAMPLE_TABLE),
        ));

        let body = json!({
            "grade": "Grade 7",
            "subject": "Science",
            "objective": "Describe the parts of a cell"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["raw"], SAMPLE_TABLE);
        let html = json["html"].as_str().unwrap();
        assert!(html.starts_with("<table class=\"lesson-table\">"));
        assert!(html.contains("<th>Lesson Part</th>"));
        assert!(html.contains("<td>Drill</td>"));
    }

    #[tokio::test]
    async fn test_generate_lesson_builds_prompt_from_inputs() {
        let mock = Arc::new(MockModelClient::new().with_response(SAMPLE_TABLE));
        let state = state_with_model(Arc::clone(&mock) as Arc<dyn ModelClient>);

        let body = json!({
            "grade": "Grade 4",
            "subject": "Mathematics",
            "objective": "Add fractions with like denominators"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Grade Level: Grade 4"));
        assert!(prompts[0].contains("Subject: Mathematics"));
        assert!(prompts[0].contains("Objective: Add fractions with like denominators"));
    }

    #[tokio::test]
    async fn test_generate_lesson_missing_fields() {
        let state = state_with_model(Arc::new(MockModelClient::new()));

        let response = post_json(state, "/api/generate-lesson", json!({"grade": "7"})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "grade, subject, and objective are required");
    }

    #[tokio::test]
    async fn test_generate_lesson_rejects_blank_fields() {
        let state = state_with_model(Arc::new(MockModelClient::new()));

        let body = json!({
            "grade": "   ",
            "subject": "Science",
            "objective": "Observe weather patterns"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_lesson_without_model() {
        let state = state_without_model();

        let body = json!({
            "grade": "Grade 7",
            "subject": "Science",
            "objective": "Describe the parts of a cell"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Model API key not configured");
    }

    #[tokio::test]
    async fn test_generate_lesson_upstream_error() {
        let state = state_with_model(Arc::new(MockModelClient::new().with_error(
            ModelError::Api {
                message: "model exploded".to_string(),
            },
        )));

        let body = json!({
            "grade": "Grade 7",
            "subject": "Science",
            "objective": "Describe the parts of a cell"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("Model request failed"));
        assert!(message.contains("model exploded"));
    }

    #[tokio::test]
    async fn test_generate_lesson_prose_yields_null_html() {
        let state = state_with_model(Arc::new(
            MockModelClient::new().with_response("Sorry, I cannot produce a table."),
        ));

        let body = json!({
            "grade": "Grade 7",
            "subject": "Science",
            "objective": "Describe the parts of a cell"
        });
        let response = post_json(state, "/api/generate-lesson", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["raw"], "Sorry, I cannot produce a table.");
        assert!(json["html"].is_null());
    }

    #[tokio::test]
    async fn test_save_lesson_not_implemented() {
        let state = state_without_model();

        let response = post_json(state, "/api/save-lesson", json!({})).await;

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Saving not configured. Add a database or storage backend to enable this feature."
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = state_without_model();

        let response = get_uri(state, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "0.0.0-test");
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let state = state_without_model();

        let response = get_uri(state, "/health").await;

        let headers = response.headers();
        assert!(headers.contains_key("content-security-policy"));
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let state = state_without_model();

        let app = create_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_unknown_asset_returns_not_found() {
        let state = state_without_model();

        let response = get_uri(state, "/missing-asset.css").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
