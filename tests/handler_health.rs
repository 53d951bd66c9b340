mod common;

use axum::http::{HeaderValue, Method, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use url_shortcuts::domain::entities::Shortcut;
use url_shortcuts::domain::repositories::ShortcutRepository;
use url_shortcuts::error::AppError;
use url_shortcuts::routes::app_router;

/// Store that fails every call.
struct BrokenRepository;

#[async_trait::async_trait]
impl ShortcutRepository for BrokenRepository {
    async fn create_if_absent(&self, _url: &str, _slug: &str) -> Result<Option<Shortcut>, AppError> {
        Err(broken())
    }
    async fn resolve_and_count(&self, _slug: &str) -> Result<Option<String>, AppError> {
        Err(broken())
    }
    async fn delete_and_return(&self, _slug: &str) -> Result<Option<Shortcut>, AppError> {
        Err(broken())
    }
    async fn get(&self, _slug: &str) -> Result<Option<Shortcut>, AppError> {
        Err(broken())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(broken())
    }
}

fn broken() -> AppError {
    AppError::internal("Database error", serde_json::json!({ "reason": "connection refused" }))
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let state = common::create_state_with(Arc::new(BrokenRepository), None);
    let server = axum_test::TestServer::new(app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "degraded");
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let state = common::create_state_with(Arc::new(BrokenRepository), None);
    let server = axum_test::TestServer::new(app_router(state)).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["error"], "UNKNOWN");
    assert_eq!(json["message"], "Internal server error");
    assert_eq!(json["details"], serde_json::json!({}));
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://app.example.com"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("authorization,content-type"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
