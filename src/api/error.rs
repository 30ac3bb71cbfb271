//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::content::ContentError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Content model error
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and machine-readable code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Content(e) => match e {
                ContentError::MemeNotFound(_) => (StatusCode::NOT_FOUND, "MEME_NOT_FOUND"),
                ContentError::DateOutOfRange { .. } | ContentError::InvalidDate(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_DATE")
                }
                ContentError::ClockBeforeArchive { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "CLOCK_ERROR")
                }
                ContentError::EmptyPool | ContentError::Preference(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "CONTENT_ERROR")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::debug!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_mapping() {
        let err = ApiError::from(ContentError::MemeNotFound(13));
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "MEME_NOT_FOUND"));

        let err = ApiError::from(ContentError::InvalidDate("tomorrow".to_string()));
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "INVALID_DATE"));

        let err = ApiError::from(ContentError::EmptyPool);
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
