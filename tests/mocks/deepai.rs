//! Mock DeepAI text2img endpoint
//!
//! Also hosts the generated images so the video endpoint can download them.

use serde_json::json;
use wiremock::{
    matchers::{any, body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_DEEPAI_API_KEY;

pub const DEEPAI_PATH: &str = "/api/text2img";

/// Path the generated image is hosted on
pub const IMAGE_PATH: &str = "/images/output.png";

/// Bytes served for the hosted image
pub const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image";

/// Mock DeepAI server wrapper
pub struct MockDeepAi {
    server: MockServer,
}

impl MockDeepAi {
    /// Start a new mock DeepAI server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full text2img URL for the config
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), DEEPAI_PATH)
    }

    /// URL the mock reports as `output_url`
    pub fn image_url(&self) -> String {
        format!("{}{}", self.server.uri(), IMAGE_PATH)
    }

    /// text2img requests answer with the hosted image URL
    pub async fn mock_image_url(&self) {
        Mock::given(method("POST"))
            .and(path(DEEPAI_PATH))
            .and(header("api-key", TEST_DEEPAI_API_KEY))
            .and(body_string_contains("text="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "deepai-test-1",
                "output_url": self.image_url()
            })))
            .mount(&self.server)
            .await;
    }

    /// text2img requests whose form body contains `fragment` answer with the image URL
    pub async fn mock_image_url_for(&self, fragment: &str) {
        Mock::given(method("POST"))
            .and(path(DEEPAI_PATH))
            .and(body_string_contains(fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "deepai-test-2",
                "output_url": self.image_url()
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// text2img requests fail with `status`
    pub async fn mock_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(DEEPAI_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "err": "error processing given inputs from request"
            })))
            .mount(&self.server)
            .await;
    }

    /// The hosted image is served
    pub async fn mock_hosted_image(&self) {
        Mock::given(method("GET"))
            .and(path(IMAGE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(IMAGE_BYTES)
                    .insert_header("Content-Type", "image/png"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// The hosted image is gone
    pub async fn mock_hosted_image_missing(&self) {
        Mock::given(method("GET"))
            .and(path(IMAGE_PATH))
            .respond_with(ResponseTemplate::new(404))
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
