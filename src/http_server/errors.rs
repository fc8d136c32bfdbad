//! # API Errors
//!
//! The classified error taxonomy and its single rendering point. Handlers
//! return `Result<_, ApiError>` and never write error responses inline;
//! the `IntoResponse` impl below produces the uniform JSON envelope
//! `{"error": <kind>, "message": <text>}` for every failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Referenced id is absent
    #[error("Product not found")]
    NotFound,

    /// Malformed write payload
    #[error("{0}")]
    Validation(String),

    /// Missing or incorrect shared secret
    #[error("Invalid or missing API key")]
    Auth,

    /// Anything unclassified; the detail is logged, never rendered
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error kind rendered in the `error` field of the envelope
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound => "NotFoundError",
            ApiError::Validation(_) => "ValidationError",
            ApiError::Auth => "AuthError",
            ApiError::Internal(_) => "Error",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("unclassified error: {}", detail);
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Auth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_kinds() {
        assert_eq!(ApiError::NotFound.kind(), "NotFoundError");
        assert_eq!(ApiError::Validation("bad".to_string()).kind(), "ValidationError");
        assert_eq!(ApiError::Auth.kind(), "AuthError");
        assert_eq!(ApiError::Internal("boom".to_string()).kind(), "Error");
    }

    #[test]
    fn test_internal_detail_is_not_rendered() {
        let err = ApiError::Internal("lock poisoned".to_string());
        let body = ErrorResponse::from(&err);

        assert_eq!(body.message, "Internal Server Error");
        assert!(!body.message.contains("lock"));
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(StoreError::Poisoned),
            ApiError::Internal(_)
        ));
    }
}
