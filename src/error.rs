use thiserror::Error;

use crate::api::ApiResponse;

/// Errors returned by [`crate::api::ApiClient`] and the endpoint helpers built on it.
///
/// HTTP failures are values, not panics: callers branch on the variant to
/// decide what to show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 401 and the refresh endpoint refused to issue a
    /// new token. The session has been cleared; the caller must log in again.
    #[error("Authentication failed (status {}): session cleared", .0.status())]
    AuthFailed(ApiResponse),

    /// Any other non-2xx response, passed through untouched.
    #[error("API error (status {}): {}", .0.status(), .0.error_message())]
    Status(ApiResponse),

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected before any network traffic.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The HTTP response attached to this error, if the server answered.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::AuthFailed(response) | ApiError::Status(response) => Some(response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status().as_u16())
    }

    pub fn is_auth_failed(&self) -> bool {
        matches!(self, ApiError::AuthFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
