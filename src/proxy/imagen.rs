//! Imagen image-generation client
//!
//! Returns the generated image inline as base64 bytes.

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::{
        models::{ImagenInstance, ImagenParameters, ImagenPredictRequest, ImagenPredictResponse},
        api_failure, read_json, GeneratedImage, ImageProvider, ImageSource,
    },
};

const PROVIDER: &str = "Imagen";

/// Imagen predict client
pub struct ImagenClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl ImagenClient {
    /// Create a new Imagen client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.imagen_api_url.clone(),
            api_key: config.imagen_api_key.clone(),
        }
    }

    async fn predict(&self, api_key: &str, prompt: &str) -> AppResult<ImagenPredictResponse> {
        let request = ImagenPredictRequest {
            instances: vec![ImagenInstance { prompt }],
            parameters: ImagenParameters { sample_count: 1 },
        };

        debug!(url = %self.api_url, "Sending predict request to Imagen");

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL may carry the credential
                let e = e.without_url();
                error!(error = %e, "Failed to send request to Imagen");
                e
            })?;

        read_json(PROVIDER, response).await
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::MissingCredential(
                "Imagen API key is not set on the backend server, or billing is not enabled for Imagen."
                    .to_string(),
            )
        })
    }
}

#[async_trait]
impl ImageProvider for ImagenClient {
    fn source(&self) -> ImageSource {
        ImageSource::Imagen
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
            .predict(api_key, prompt)
            .await
            .map_err(|e| api_failure("Failed to generate image with Imagen", e))?;

        result
            .predictions
            .into_iter()
            .next()
            .and_then(|p| p.bytes_base64_encoded)
            .map(GeneratedImage::Base64)
            .ok_or_else(|| {
                error!("Imagen response did not contain image bytes");
                AppError::UpstreamError(
                    "Failed to extract image from Imagen AI response".to_string(),
                )
            })
    }
}
