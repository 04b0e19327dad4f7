//! Visual generation endpoint
//!
//! Condenses a story into one image prompt (best effort) and sends it to the
//! image provider selected by `use_imagen`.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::{AppError, AppResult},
    proxy::{GeminiClient, GeneratedImage, ImageSource},
    routes::{metrics::record_image_prompt_fallback, require_text},
    AppState,
};

/// Visual generation request
#[derive(Debug, Clone, Deserialize)]
pub struct VisualRequest {
    #[serde(default)]
    pub story_text: Option<String>,
    #[serde(default)]
    pub use_imagen: Option<bool>,
}

/// Visual generation response
///
/// Exactly one of `image_base64` and `image_url` is present, depending on
/// the provider.
#[derive(Debug, Clone, Serialize)]
pub struct VisualResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub image_prompt_used: String,
    pub source: ImageSource,
}

/// The prompt actually sent to the image provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePrompt {
    /// One-sentence summary produced by the text model
    Summarized(String),
    /// The full story text, used when summarizing failed
    FullStory(String),
}

impl ImagePrompt {
    pub fn as_str(&self) -> &str {
        match self {
            ImagePrompt::Summarized(text) | ImagePrompt::FullStory(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ImagePrompt::Summarized(text) | ImagePrompt::FullStory(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImagePrompt::FullStory(_))
    }
}

/// A generated visual together with the prompt that produced it
#[derive(Debug, Clone)]
pub struct Visual {
    pub image: GeneratedImage,
    pub image_prompt_used: String,
    pub source: ImageSource,
}

impl From<Visual> for VisualResponse {
    fn from(visual: Visual) -> Self {
        let (image_base64, image_url) = match visual.image {
            GeneratedImage::Base64(data) => (Some(data), None),
            GeneratedImage::Url(url) => (None, Some(url)),
        };

        Self {
            image_base64,
            image_url,
            image_prompt_used: visual.image_prompt_used,
            source: visual.source,
        }
    }
}

/// Instruction asking the text model for a single visual sentence
pub fn build_summary_prompt(story_text: &str) -> String {
    format!(
        "Summarize the essence of the following story in one highly visual sentence for an image generation AI:\n\n\"{}\"",
        story_text
    )
}

/// Ask the text model to condense the story into one visual sentence
pub async fn summarize_for_image(gemini: &GeminiClient, story_text: &str) -> AppResult<String> {
    gemini
        .generate_text(&build_summary_prompt(story_text))
        .await?
        .ok_or_else(|| {
            AppError::UpstreamError("Failed to extract summary from AI response".to_string())
        })
}

/// Pick the image prompt, falling back to the full story text on any failure
pub async fn resolve_image_prompt(gemini: &GeminiClient, story_text: &str) -> ImagePrompt {
    match summarize_for_image(gemini, story_text).await {
        Ok(summary) => {
            debug!(summary = %summary, "Story summarized for visual");
            ImagePrompt::Summarized(summary)
        }
        Err(e) => {
            warn!(error = %e, "Image prompt summary failed, using full story text");
            record_image_prompt_fallback();
            ImagePrompt::FullStory(story_text.to_string())
        }
    }
}

/// Generate one visual for the story
///
/// The selected provider's credential is checked before any upstream call.
pub async fn create_visual(state: &AppState, story_text: &str, use_imagen: bool) -> AppResult<Visual> {
    let provider = state.image_provider(use_imagen);
    provider.ensure_configured()?;

    let prompt = resolve_image_prompt(&state.gemini, story_text).await;

    info!(
        source = provider.source().as_str(),
        fallback = prompt.is_fallback(),
        "Generating visual"
    );

    let image = provider.generate_image(prompt.as_str()).await?;

    Ok(Visual {
        image,
        image_prompt_used: prompt.into_text(),
        source: provider.source(),
    })
}

/// Visual generation endpoint handler
pub async fn generate_visual(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VisualRequest>, JsonRejection>,
) -> AppResult<Json<VisualResponse>> {
    let Json(request) = payload?;
    let story_text = require_text(request.story_text, "Story text is required")?;
    let use_imagen = request.use_imagen.unwrap_or(false);

    let visual = create_visual(&state, &story_text, use_imagen).await?;
    Ok(Json(visual.into()))
}
