//! Upstream wire models
//!
//! Request and response bodies for the Gemini, Imagen and DeepAI APIs.
//! Response types only model the fields we read; everything else is ignored.

use serde::{Deserialize, Serialize};

// =========================================================================
// Gemini generateContent
// =========================================================================

/// A piece of content in a Gemini request
#[derive(Debug, Clone, Serialize)]
pub struct ContentPart<'a> {
    pub text: &'a str,
}

/// A single conversational turn
#[derive(Debug, Clone, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<ContentPart<'a>>,
}

/// Gemini generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single user turn carrying one text part
    pub fn user_text(text: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![ContentPart { text }],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

/// Gemini generateContent response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

// =========================================================================
// Imagen predict
// =========================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ImagenInstance<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenParameters {
    pub sample_count: u32,
}

/// Imagen predict request
#[derive(Debug, Clone, Serialize)]
pub struct ImagenPredictRequest<'a> {
    pub instances: Vec<ImagenInstance<'a>>,
    pub parameters: ImagenParameters,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagenPrediction {
    pub bytes_base64_encoded: Option<String>,
}

/// Imagen predict response
#[derive(Debug, Clone, Deserialize)]
pub struct ImagenPredictResponse {
    #[serde(default)]
    pub predictions: Vec<ImagenPrediction>,
}

// =========================================================================
// DeepAI text2img
// =========================================================================

/// DeepAI text2img response
#[derive(Debug, Clone, Deserialize)]
pub struct DeepAiResponse {
    pub output_url: Option<String>,
}
