//! Gemini text-generation client
//!
//! Used for story generation and for condensing a story into a single
//! image prompt.

use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::{
        models::{GenerateContentRequest, GenerateContentResponse},
        read_json,
    },
};

const PROVIDER: &str = "Gemini";

/// Gemini generateContent client
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.gemini_api_url.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Check if the client is configured with an API key
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::MissingCredential(
                "Gemini API key is not set on the backend server.".to_string(),
            )
        })
    }

    /// Send a single-turn prompt and return the first candidate's text
    ///
    /// `Ok(None)` means Gemini answered but without candidate text; callers
    /// decide how to report that.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_text(&self, prompt: &str) -> AppResult<Option<String>> {
        let api_key = self.api_key()?;

        debug!(url = %self.api_url, "Sending generateContent request to Gemini");

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::user_text(prompt))
            .send()
            .await
            .map_err(|e| {
                // The URL may carry the credential
                let e = e.without_url();
                error!(error = %e, "Failed to send request to Gemini");
                e
            })?;

        let result: GenerateContentResponse = read_json(PROVIDER, response).await?;

        let text = result.into_first_text();
        if text.is_none() {
            error!("Gemini response did not contain candidate text");
        }
        Ok(text)
    }
}
