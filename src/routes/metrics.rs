//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

/// Register all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "storyloom_requests_total",
        "Total number of generation requests processed"
    );
    metrics::describe_histogram!(
        "storyloom_request_duration_seconds",
        "Generation request duration in seconds"
    );
    metrics::describe_counter!(
        "storyloom_upstream_calls_total",
        "Total calls made to upstream AI providers"
    );
    metrics::describe_counter!(
        "storyloom_image_prompt_fallbacks_total",
        "Visual requests that used the full story text as image prompt"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Middleware recording count and latency per matched route
pub async fn track_requests(request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(request).await;

    record_request(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

/// Record a request
pub fn record_request(endpoint: &str, status: u16, duration_secs: f64) {
    metrics::counter!(
        "storyloom_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("storyloom_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration_secs);
}

/// Record an upstream call outcome
pub fn record_upstream_call(provider: &str, result: &str) {
    metrics::counter!(
        "storyloom_upstream_calls_total",
        "provider" => provider.to_string(),
        "result" => result.to_string()
    )
    .increment(1);
}

/// Record a visual request that fell back to the full story text
pub fn record_image_prompt_fallback() {
    metrics::counter!("storyloom_image_prompt_fallbacks_total").increment(1);
}
