//! Error types for Storyloom
//!
//! Every handler returns `AppResult`, so all failures are converted to a
//! `{"error": "..."}` body at the handler boundary.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// A required client-supplied field is absent or empty
    #[error("{0}")]
    MissingInput(String),

    /// The request body could not be parsed
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// An upstream credential is not configured on the server
    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    UpstreamError(String),

    /// Transport failure; the URL is stripped because it can carry a `?key=` credential
    #[error("Upstream request failed: {0}")]
    HttpError(reqwest::Error),

    #[error("Failed to generate video: {0}")]
    VideoFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An unexpected error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredential(_)
            | AppError::UpstreamError(_)
            | AppError::HttpError(_)
            | AppError::VideoFailed(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err.without_url())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
