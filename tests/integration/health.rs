//! Health endpoint integration tests
//!
//! - GET / - Plaintext liveness string
//! - GET /health - Provider credential status
//! - GET /health/live - Liveness probe

use serde_json::Value;

use crate::common::{Keys, TestContext};

#[tokio::test]
async fn test_root_returns_liveness_string() {
    let ctx = TestContext::start(Keys::NONE).await;

    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Backend is running!");
}

#[tokio::test]
async fn test_health_reports_all_providers() {
    let ctx = TestContext::start(Keys::ALL).await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["providers"]["gemini"], true);
    assert_eq!(body["providers"]["imagen"], true);
    assert_eq!(body["providers"]["deepai"], true);
}

#[tokio::test]
async fn test_health_degraded_without_keys_still_ok() {
    let ctx = TestContext::start(Keys::ALL.without_imagen()).await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["providers"]["imagen"], false);
    assert_eq!(body["providers"]["deepai"], true);
}

#[tokio::test]
async fn test_liveness_probe() {
    let ctx = TestContext::start(Keys::NONE).await;

    let response = ctx.server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_reports_generation_requests() {
    storyloom::routes::metrics::init_metrics();
    let ctx = TestContext::start(Keys::NONE).await;

    ctx.server
        .post("/generate_story")
        .json(&serde_json::json!({}))
        .await
        .assert_status(axum::http::StatusCode::BAD_REQUEST);

    let response = ctx.server.get("/metrics").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("storyloom_requests_total"));
    assert!(body.contains("endpoint=\"/generate_story\""));
}
