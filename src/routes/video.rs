//! Video generation endpoint (conceptual)
//!
//! Checks that a text credential and an image credential are configured,
//! produces one visual through the visual logic, stages it in the work
//! directory and then discards it. No narration, encoding or upload happens;
//! the response always carries the same placeholder URL.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    proxy::GeneratedImage,
    routes::{require_text, visual::create_visual},
    AppState,
};

/// Returned for every successful video request
pub const PLACEHOLDER_VIDEO_URL: &str = "https://example.com/conceptual_video_link.mp4";

pub const VIDEO_MESSAGE: &str =
    "Video generation process initiated conceptually. Video URL is placeholder.";

/// Video generation request
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRequest {
    #[serde(default)]
    pub story_text: Option<String>,
    #[serde(default)]
    pub image_prompt: Option<String>,
}

/// Video generation response
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub message: String,
    pub video_url: String,
}

/// Credentials the video process depends on
fn check_credentials(state: &AppState) -> AppResult<()> {
    if !state.gemini.is_configured() {
        return Err(AppError::MissingCredential(
            "Gemini API key is required on the backend for the video process.".to_string(),
        ));
    }

    if !(state.imagen.is_configured() || state.deepai.is_configured()) {
        return Err(AppError::MissingCredential(
            "An image API key (Imagen or DeepAI) is required for the video process.".to_string(),
        ));
    }

    Ok(())
}

/// Turn a generated image into raw bytes
async fn image_bytes(client: &reqwest::Client, image: &GeneratedImage) -> AppResult<Vec<u8>> {
    match image {
        GeneratedImage::Url(url) => {
            debug!(url = %url, "Downloading visual for video");
            let response = client.get(url).send().await?;
            if !response.status().is_success() {
                return Err(AppError::VideoFailed(format!(
                    "Failed to download visual from URL: {} ({})",
                    url,
                    response.status()
                )));
            }
            Ok(response.bytes().await?.to_vec())
        }
        GeneratedImage::Base64(data) => STANDARD.decode(data).map_err(|e| {
            AppError::VideoFailed(format!("Failed to decode base64 image for video: {}", e))
        }),
    }
}

/// Write image bytes to a uniquely named file in the work directory
pub(crate) async fn stage_visual(work_dir: &Path, bytes: &[u8]) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(work_dir).await?;
    let path = work_dir.join(format!("storyloom-visual-{}.png", Uuid::new_v4()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Fetch one visual, stage it and discard it
async fn prepare_visual(state: &AppState, story_text: &str) -> AppResult<()> {
    let visual = create_visual(state, story_text, false).await?;
    let bytes = image_bytes(&state.http_client, &visual.image).await?;

    let path = stage_visual(&state.config.video_work_dir, &bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "Visual staged for video");

    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!(path = %path.display(), error = %e, "Failed to remove staged visual");
    }

    Ok(())
}

/// Run the conceptual video process for the request
pub async fn create_video(state: &AppState, request: VideoRequest) -> AppResult<VideoResponse> {
    let story_text = require_text(request.story_text, "Story text is required")?;
    check_credentials(state)?;

    let image_prompt = request
        .image_prompt
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| story_text.clone());
    info!(
        story_len = story_text.len(),
        image_prompt_len = image_prompt.len(),
        "Starting conceptual video generation"
    );

    prepare_visual(state, &story_text).await.map_err(|e| match e {
        AppError::VideoFailed(_) => e,
        other => AppError::VideoFailed(other.to_string()),
    })?;

    Ok(VideoResponse {
        message: VIDEO_MESSAGE.to_string(),
        video_url: PLACEHOLDER_VIDEO_URL.to_string(),
    })
}

/// Video generation endpoint handler
pub async fn generate_video(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> AppResult<Json<VideoResponse>> {
    let Json(request) = payload?;
    let response = create_video(&state, request).await?;
    Ok(Json(response))
}
