//! Storyloom - HTTP relay for generative-AI story, visual and video requests
//!
//! This library provides the core functionality for the Storyloom server.
//! It forwards story requests to Gemini, image requests to Imagen or DeepAI,
//! and runs a conceptual video step on top of the visual logic.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::proxy::{DeepAiClient, GeminiClient, ImageProvider, ImagenClient};

/// Application state shared across all request handlers
///
/// Immutable after construction; credentials come from `Config`.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub start_time: Instant,
    /// Text generation and image-prompt summaries
    pub gemini: Arc<GeminiClient>,
    /// Image provider returning inline base64 bytes
    pub imagen: Arc<dyn ImageProvider>,
    /// Image provider returning a hosted URL
    pub deepai: Arc<dyn ImageProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let gemini = Arc::new(GeminiClient::new(http_client.clone(), &config));
        let imagen: Arc<dyn ImageProvider> =
            Arc::new(ImagenClient::new(http_client.clone(), &config));
        let deepai: Arc<dyn ImageProvider> =
            Arc::new(DeepAiClient::new(http_client.clone(), &config));

        Ok(Self {
            config,
            http_client,
            start_time: Instant::now(),
            gemini,
            imagen,
            deepai,
        })
    }

    /// Image provider selected by the `use_imagen` flag
    pub fn image_provider(&self, use_imagen: bool) -> &Arc<dyn ImageProvider> {
        if use_imagen {
            &self.imagen
        } else {
            &self.deepai
        }
    }
}
