//! HTTP routes for Storyloom
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod health;
pub mod metrics;
pub mod story;
pub mod video;
pub mod visual;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The browser frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let generation_routes = Router::new()
        .route("/generate_story", post(story::generate_story))
        .route("/generate_visual", post(visual::generate_visual))
        .route("/generate_video", post(video::generate_video))
        .route_layer(middleware::from_fn(metrics::track_requests));

    // Liveness, health and metrics are not counted as requests
    let public_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(generation_routes)
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Treat an absent, null or empty field as missing
pub(crate) fn require_text(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::MissingInput(message.to_string()))
}
