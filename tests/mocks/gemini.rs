//! Mock Gemini generateContent endpoint

use serde_json::json;
use wiremock::{
    matchers::{any, body_string_contains, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_GEMINI_API_KEY;

/// Path the mock serves generateContent on
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// Marker present in every image-prompt summary request
const SUMMARY_MARKER: &str = "Summarize the essence of the following story";

/// Marker present in every story request
const STORY_MARKER: &str = "Generate a captivating story";

/// Build a generateContent response carrying `text`
pub fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                },
                "finishReason": "STOP"
            }
        ]
    })
}

/// Mock Gemini server wrapper
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full generateContent URL for the config
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), GEMINI_PATH)
    }

    /// Story requests answer with `story`
    pub async fn mock_story(&self, story: &str) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", TEST_GEMINI_API_KEY))
            .and(body_string_contains(STORY_MARKER))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(story)))
            .mount(&self.server)
            .await;
    }

    /// Story requests whose instruction contains `fragment` answer with `story`
    pub async fn mock_story_containing(&self, fragment: &str, story: &str) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(body_string_contains(fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(story)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Summary requests answer with `summary`
    pub async fn mock_summary(&self, summary: &str) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", TEST_GEMINI_API_KEY))
            .and(body_string_contains(SUMMARY_MARKER))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(summary)))
            .mount(&self.server)
            .await;
    }

    /// Every request fails with `status`
    pub async fn mock_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "code": status,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Every request succeeds with a body that has no candidate text
    pub async fn mock_empty_candidates(&self) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "SAFETY" }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Every request succeeds with a non-JSON body
    pub async fn mock_malformed(&self) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
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
