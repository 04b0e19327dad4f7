//! Configuration management for Storyloom
//!
//! Configuration is loaded from environment variables once at startup and
//! handed to every handler through `AppState`. Nothing reads the environment
//! after that.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default Gemini text-generation endpoint
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
/// Default Imagen image-generation endpoint
pub const DEFAULT_IMAGEN_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/imagen-3.0-generate-002:predict";
/// Default DeepAI text-to-image endpoint
pub const DEFAULT_DEEPAI_API_URL: &str = "https://api.deepai.org/api/text2img";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini generateContent URL
    pub gemini_api_url: String,
    /// Gemini API key (story generation and image-prompt summaries)
    pub gemini_api_key: Option<String>,

    /// Imagen predict URL
    pub imagen_api_url: String,
    /// Imagen API key
    pub imagen_api_key: Option<String>,

    /// DeepAI text2img URL
    pub deepai_api_url: String,
    /// DeepAI API key
    pub deepai_api_key: Option<String>,

    /// Overall timeout for outbound requests (in seconds)
    pub upstream_timeout_seconds: u64,

    /// Scratch directory used by the video endpoint
    pub video_work_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("STORYLOOM_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("STORYLOOM_PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("Invalid STORYLOOM_PORT")?,

            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_api_key: credential(lookup("GEMINI_API_KEY")),

            imagen_api_url: lookup("IMAGEN_API_URL")
                .unwrap_or_else(|| DEFAULT_IMAGEN_API_URL.to_string()),
            imagen_api_key: credential(lookup("IMAGEN_API_KEY")),

            deepai_api_url: lookup("DEEPAI_API_URL")
                .unwrap_or_else(|| DEFAULT_DEEPAI_API_URL.to_string()),
            deepai_api_key: credential(lookup("DEEPAI_API_KEY")),

            upstream_timeout_seconds: lookup("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|| "300".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,

            video_work_dir: lookup("VIDEO_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        })
    }
}

/// An empty key is treated the same as an unset one
fn credential(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
