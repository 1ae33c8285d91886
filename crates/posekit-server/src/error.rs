//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the JSON error
//! envelope `{"error": "<message>"}` with a server-error status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use posekit_core::DetectError;

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// API errors with HTTP status code mapping.
///
/// The API distinguishes a single error kind: an internal fault caught at
/// the handler boundary and rendered as a 500 with a JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Internal(message) = self;
        let body = ErrorBody { error: message };
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<DetectError> for ApiError {
    fn from(err: DetectError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
