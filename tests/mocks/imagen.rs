//! Mock Imagen predict endpoint

use serde_json::json;
use wiremock::{
    matchers::{any, body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_IMAGEN_API_KEY;

pub const IMAGEN_PATH: &str = "/v1beta/models/imagen-3.0-generate-002:predict";

/// Mock Imagen server wrapper
pub struct MockImagen {
    server: MockServer,
}

impl MockImagen {
    /// Start a new mock Imagen server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full predict URL for the config
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), IMAGEN_PATH)
    }

    /// Predict requests for `prompt` answer with `image_base64`
    pub async fn mock_image(&self, prompt: &str, image_base64: &str) {
        Mock::given(method("POST"))
            .and(path(IMAGEN_PATH))
            .and(query_param("key", TEST_IMAGEN_API_KEY))
            .and(body_partial_json(json!({
                "instances": [{ "prompt": prompt }],
                "parameters": { "sampleCount": 1 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [
                    { "bytesBase64Encoded": image_base64, "mimeType": "image/png" }
                ]
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Predict requests answer with no predictions
    pub async fn mock_no_predictions(&self) {
        Mock::given(method("POST"))
            .and(path(IMAGEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches this server
    pub async fn expect_no_calls(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
