//! HTTP error mapping for the notes API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::notes::NoteError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body was not a JSON object.
    #[error("Invalid JSON payload")]
    InvalidPayload,

    #[error(transparent)]
    Note(#[from] NoteError),

    /// Unexpected condition, e.g. a poisoned store lock.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::InvalidPayload => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            Self::Note(NoteError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Note(NoteError::CapacityExceeded { .. }) => {
                (StatusCode::FORBIDDEN, "CAPACITY_EXCEEDED")
            }
            Self::Internal(msg) => {
                tracing::error!(message = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let error = match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error, code })).into_response()
    }
}
