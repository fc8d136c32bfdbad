//! # Request Middleware
//!
//! The logging and authentication stages of the request pipeline.
//!
//! Logging is layered on the outermost router and runs before any other
//! processing. Authentication is layered on the `/api` subtree only, so
//! the path-prefix condition is structural rather than a string check.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use super::errors::ApiError;

/// Header carrying the shared secret on mutating requests
pub const API_KEY_HEADER: &str = "x-api-key";

/// The shared secret. Hardcoded: a placeholder for a real credential
/// mechanism.
pub const API_KEY: &str = "my-secret-key";

/// Log every inbound request: ISO-8601 timestamp, method, and the full
/// requested path including the query string. Never rejects.
pub async fn log_requests(request: Request, next: Next) -> Response {
    tracing::info!(
        at = %Utc::now().to_rfc3339(),
        "{} {}",
        request.method(),
        request.uri()
    );

    next.run(request).await
}

/// Require the shared secret on every non-GET request.
///
/// GET requests pass through untouched. On a missing or mismatched key
/// the handler is never dispatched.
pub async fn require_api_key(request: Request, next: Next) -> Result<Response, ApiError> {
    if request.method() != Method::GET {
        let key = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        if key != Some(API_KEY) {
            return Err(ApiError::Auth);
        }
    }

    Ok(next.run(request).await)
}
