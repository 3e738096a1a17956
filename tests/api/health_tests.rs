//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{read_json, TestApp};

/// Basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Health check returns JSON with status and version fields
#[tokio::test]
async fn test_health_check_returns_json() {
    let app = TestApp::new();

    let body = read_json(app.get("/health").await).await;

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

/// Liveness probe should return 200 even if dependencies are unhealthy
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "alive");
}
