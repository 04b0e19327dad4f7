//! DeepAI text-to-image client
//!
//! Returns a hosted URL for the generated image.

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::{
        api_failure, models::DeepAiResponse, read_json, GeneratedImage, ImageProvider, ImageSource,
    },
};

const PROVIDER: &str = "DeepAI";

/// DeepAI text2img client
pub struct DeepAiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl DeepAiClient {
    /// Create a new DeepAI client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.deepai_api_url.clone(),
            api_key: config.deepai_api_key.clone(),
        }
    }

    async fn text2img(&self, api_key: &str, prompt: &str) -> AppResult<DeepAiResponse> {
        debug!(url = %self.api_url, "Sending text2img request to DeepAI");

        // DeepAI takes a form body and authenticates through its own header
        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", api_key)
            .form(&[("text", prompt)])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "Failed to send request to DeepAI");
                e
            })?;

        read_json(PROVIDER, response).await
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::MissingCredential(
                "DeepAI API key is not set on the backend server for free image generation."
                    .to_string(),
            )
        })
    }
}

#[async_trait]
impl ImageProvider for DeepAiClient {
    fn source(&self) -> ImageSource {
        ImageSource::DeepAi
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn ensure_configured(&self) -> AppResult<()> {
        self.api_key().map(|_| ())
    }

    #[instrument(skip(self, prompt), fields(provider = PROVIDER, prompt_len = prompt.len()))]
    async fn generate_image(&self, prompt: &str) -> AppResult<GeneratedImage> {
        let api_key = self.api_key()?;

        let result = self
            .text2img(api_key, prompt)
            .await
            .map_err(|e| api_failure("Failed to generate image with DeepAI", e))?;

        match result.output_url {
            Some(url) => {
                debug!(url = %url, "DeepAI image URL received");
                Ok(GeneratedImage::Url(url))
            }
            None => {
                error!("DeepAI response did not contain output_url");
                Err(AppError::UpstreamError(
                    "Failed to extract image URL from DeepAI response".to_string(),
                ))
            }
        }
    }
}
