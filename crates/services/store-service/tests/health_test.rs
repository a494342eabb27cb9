//! Integration tests for the store service endpoints.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
};
use common::{HealthResponse, SettingsLoader};
use serde_json::Value;
use tower::ServiceExt;

use store_service_lib::{config, routes::create_router, SERVICE_NAME};

// =============================================================================
// Test Helpers
// =============================================================================

async fn send(method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    create_router().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_ok() {
    let response = send(Method::GET, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_reports_store_service() {
    let response = send(Method::GET, "/").await;
    let body = body_json(response).await;

    assert_eq!(body["service"], "store");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_root_body_is_health_response() {
    let response = send(Method::GET, "/").await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(health, HealthResponse::ok(SERVICE_NAME));
}

#[tokio::test]
async fn test_root_is_stable_across_requests() {
    for _ in 0..3 {
        let response = send(Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_path_returns_not_found_detail() {
    let response = send(Method::GET, "/orders").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Not Found");
}

#[tokio::test]
async fn test_post_root_is_method_not_allowed() {
    let response = send(Method::POST, "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["detail"], "Method Not Allowed");
}

#[tokio::test]
async fn test_head_root_is_method_not_allowed() {
    let response = send(Method::HEAD, "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// OpenAPI Tests
// =============================================================================

#[tokio::test]
async fn test_openapi_document_lists_root() {
    let response = send(Method::GET, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert_eq!(doc["info"]["title"], "Store Service");
    assert!(doc["paths"]["/"]["get"].is_object());
}

// =============================================================================
// Startup Tests
// =============================================================================

#[tokio::test]
async fn test_startup_fails_without_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let loader = SettingsLoader::new(dir.path(), [("ENV", "production")]);

    let config = config::from_lookup(|_| None).with_overrides(None, Some(0));

    let result = store_service_lib::run(&config, &loader).await;
    assert!(result.is_err());
    assert!(common::settings::get().is_none());
}
