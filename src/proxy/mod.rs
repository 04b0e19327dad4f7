//! Proxy module
//!
//! Handles request forwarding to upstream AI providers.

pub mod deepai;
pub mod gemini;
pub mod imagen;
pub mod models;
pub mod provider;

pub use deepai::DeepAiClient;
pub use gemini::GeminiClient;
pub use imagen::ImagenClient;
pub use provider::{GeneratedImage, ImageProvider, ImageSource};

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{
    error::{AppError, AppResult},
    routes::metrics::record_upstream_call,
};

/// Reword a failed upstream exchange as `<context> due to API error: <detail>`
///
/// Missing credentials keep their own message.
pub(crate) fn api_failure(context: &str, err: AppError) -> AppError {
    match err {
        AppError::MissingCredential(_) => err,
        other => AppError::UpstreamError(format!("{} due to API error: {}", context, other)),
    }
}

/// Check the upstream status and parse its JSON body
///
/// Non-2xx responses and unparseable bodies both become `UpstreamError`
/// carrying the upstream detail.
pub(crate) async fn read_json<R: DeserializeOwned>(
    provider: &'static str,
    response: reqwest::Response,
) -> AppResult<R> {
    let status = response.status();
    debug!(provider, status = %status, "Upstream response status");

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        error!(provider, status = %status, body = %text, "Upstream request failed");
        record_upstream_call(provider, "error");
        return Err(AppError::UpstreamError(format!(
            "{} API error {}: {}",
            provider, status, text
        )));
    }

    let body = response.text().await?;

    match serde_json::from_str(&body) {
        Ok(result) => {
            record_upstream_call(provider, "success");
            Ok(result)
        }
        Err(e) => {
            error!(provider, error = %e, body = %body, "Failed to parse upstream response");
            record_upstream_call(provider, "error");
            Err(AppError::UpstreamError(format!(
                "Failed to parse {} response: {}",
                provider, e
            )))
        }
    }
}
