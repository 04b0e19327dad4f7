//! Mock infrastructure for testing external services
//!
//! Wiremock-based stand-ins for the upstream AI providers:
//! - Gemini generateContent (story text and image-prompt summaries)
//! - Imagen predict (inline base64 images)
//! - DeepAI text2img (hosted image URLs, plus the hosted image itself)

pub mod deepai;
pub mod gemini;
pub mod imagen;

pub use deepai::*;
pub use gemini::*;
pub use imagen::*;
