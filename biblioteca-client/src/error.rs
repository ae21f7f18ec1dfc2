//! Error types for the API client

use thiserror::Error;

/// Transport-level failures, raised before any HTTP status is available
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Errors surfaced by [`crate::ApiClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Non-2xx response; the message comes from the body's `erro` field or the status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A success response whose body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the failure happened below HTTP (connection refused, DNS, timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// HTTP status, for request errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_only() {
        let err = ApiError::Request {
            status: 400,
            message: "ISBN já cadastrado".to_string(),
        };
        assert_eq!(err.to_string(), "ISBN já cadastrado");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_error() {
        let err = ApiError::from(HttpError::ConnectionFailed("refused".to_string()));
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Connection failed: refused");
    }
}
