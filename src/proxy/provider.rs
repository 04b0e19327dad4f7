//! Image provider abstraction
//!
//! Imagen and DeepAI both turn a text prompt into an image, but hand it back
//! differently: inline base64 bytes or a hosted URL. The visual endpoint picks
//! one provider per request through this trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppResult;

/// Which upstream produced an image
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ImageSource {
    Imagen,
    #[serde(rename = "DeepAI")]
    DeepAi,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Imagen => "Imagen",
            ImageSource::DeepAi => "DeepAI",
        }
    }
}

/// An image as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Inline image bytes, base64 encoded
    Base64(String),
    /// Hosted image location
    Url(String),
}

/// Trait implemented by every image-generation upstream
///
/// Implementations hold their own credential. `ensure_configured` must be
/// cheap and must not touch the network, so handlers can reject a request
/// before any upstream is called.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Provider identity, reported back to the client as `source`
    fn source(&self) -> ImageSource;

    /// Whether a credential is configured
    fn is_configured(&self) -> bool;

    /// Fail with `MissingCredential` if no credential is configured
    fn ensure_configured(&self) -> AppResult<()>;

    /// Generate a single image for the prompt
    async fn generate_image(&self, prompt: &str) -> AppResult<GeneratedImage>;
}
