//! Health check endpoints
//!
//! - `/` - Plaintext liveness string
//! - `/health` - Health with provider credential status
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Body returned by `GET /`
pub const ROOT_MESSAGE: &str = "Backend is running!";

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Whether each upstream has a credential configured
#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub gemini: bool,
    pub imagen: bool,
    pub deepai: bool,
}

impl ProviderStatus {
    fn all_configured(&self) -> bool {
        self.gemini && self.imagen && self.deepai
    }
}

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub providers: ProviderStatus,
}

/// Simple health response for liveness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// Root liveness endpoint
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Full health check endpoint
///
/// A missing credential degrades the status but never fails the check:
/// the affected endpoints answer 500 on their own.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let providers = ProviderStatus {
        gemini: state.gemini.is_configured(),
        imagen: state.imagen.is_configured(),
        deepai: state.deepai.is_configured(),
    };

    let status = if providers.all_configured() {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        providers,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe endpoint
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
