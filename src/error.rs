//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Missing/invalid staff credentials, bad invite tokens
/// - **Resource Errors**: Invites or interviews that do not exist
/// - **Invite Lifecycle Errors**: Expired invites
/// - **Upload Errors**: Payloads that violate the size constraints
/// - **Provider Errors**: Failed requests to the voice-call provider
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Staff API key is missing, invalid, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid or missing credentials")]
    Unauthorized,

    /// The authenticated actor lacks privilege over the target resource
    /// (e.g., a recruiter issuing an invite for another organization's interview).
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("Insufficient privileges")]
    Forbidden,

    /// Requested invite does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Invite not found")]
    InviteNotFound,

    /// Referenced interview does not exist or is not visible to the caller.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Interview not found")]
    InterviewNotFound,

    /// Presented invite token does not match the stored digest.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid invite token")]
    InvalidToken,

    /// The invite's expiry timestamp has passed; the token no longer grants access.
    ///
    /// Returns HTTP 410 Gone.
    #[error("Invite expired")]
    InviteExpired,

    /// Uploaded file exceeds the maximum allowed size.
    ///
    /// Returns HTTP 413 Payload Too Large.
    #[error("File is too large (max 5 MiB)")]
    PayloadTooLarge,

    /// Uploaded file is empty.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Empty file")]
    EmptyPayload,

    /// The voice-call provider rejected or failed the session request.
    ///
    /// Returns HTTP 502 Bad Gateway. The String carries the provider-side detail
    /// for the logs; clients get a generic message.
    #[error("Voice provider request failed: {0}")]
    UpstreamProvider(String),

    /// Configured BASE_URL cannot be parsed when building an invite link.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Invalid base URL configured")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden", self.to_string()),
            AppError::InviteNotFound => {
                (StatusCode::NOT_FOUND, "invite_not_found", self.to_string())
            }
            AppError::InterviewNotFound => {
                (StatusCode::NOT_FOUND, "interview_not_found", self.to_string())
            }
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string()),
            AppError::InviteExpired => (StatusCode::GONE, "invite_expired", self.to_string()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                self.to_string(),
            ),
            AppError::EmptyPayload => (StatusCode::BAD_REQUEST, "empty_payload", self.to_string()),
            AppError::UpstreamProvider(ref detail) => {
                // Provider-side detail goes to the logs, not to the candidate
                tracing::error!("Voice provider error: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_provider_error",
                    "Voice provider request failed".to_string(),
                )
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) | AppError::InvalidBaseUrl(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            AppError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InviteNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InviteExpired.into_response().status(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::PayloadTooLarge.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::EmptyPayload.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpstreamProvider("boom".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
