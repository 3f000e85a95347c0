//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use authhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Newtype carrying an [`AppError`] across the HTTP boundary.
///
/// Handlers return `Result<_, ApiError>` so domain errors convert with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, err.message),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message),
            // Which token check failed (malformed, signature, expiry) is
            // internal detail; the caller sees one opaque outcome.
            ErrorKind::TokenMalformed | ErrorKind::TokenSignature | ErrorKind::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "Invalid session".to_string())
            }
            ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
                tracing::error!(error = %err.message, kind = %err.kind, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
