//! Story generation endpoint
//!
//! Wraps the caller's prompt in a length-specific instruction and forwards it
//! to Gemini.

use std::fmt;
use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    proxy::api_failure,
    routes::require_text,
    AppState,
};

/// Requested story length tier
///
/// Only the three tiers are accepted. Any other `length` value fails request
/// parsing with 400 instead of producing an instruction without a suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl StoryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        }
    }

    /// Guidance appended to the instruction for this tier
    pub fn instruction_suffix(&self) -> &'static str {
        match self {
            StoryLength::Short => {
                " Focus on a concise plot and impactful ending (1-2 paragraphs)."
            }
            StoryLength::Medium => {
                " Develop a brief plot with a clear beginning, middle, and end (3-5 paragraphs)."
            }
            StoryLength::Long => {
                " Create a more detailed narrative with character development, rising action, and a resolution (6+ paragraphs)."
            }
        }
    }
}

impl fmt::Display for StoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Story generation request
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub length: Option<StoryLength>,
}

/// Story generation response
#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub story: String,
}

/// Build the instruction sent to the text model
pub fn build_story_prompt(prompt: &str, length: StoryLength) -> String {
    format!(
        "Generate a captivating story. Theme/Topic: \"{}\". Length: {}.{}",
        prompt,
        length,
        length.instruction_suffix()
    )
}

/// Generate a story for the request
pub async fn create_story(state: &AppState, request: StoryRequest) -> AppResult<StoryResponse> {
    let prompt = require_text(request.prompt, "Prompt is required")?;
    let length = request.length.unwrap_or_default();

    info!(length = %length, prompt_len = prompt.len(), "Generating story");

    let instruction = build_story_prompt(&prompt, length);
    debug!(instruction = %instruction, "Story instruction prepared");

    let story = state
        .gemini
        .generate_text(&instruction)
        .await
        .map_err(|e| api_failure("Failed to generate story", e))?
        .ok_or_else(|| {
            AppError::UpstreamError("Failed to extract story from AI response".to_string())
        })?;
    debug!(story_len = story.len(), "Story extracted");

    Ok(StoryResponse { story })
}

/// Story generation endpoint handler
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> AppResult<Json<StoryResponse>> {
    let Json(request) = payload?;
    let response = create_story(&state, request).await?;
    Ok(Json(response))
}
