//! Error types for the Dropbeat HTTP client.

use dropbeat_core::{ApiErrorCode, DropbeatError};
use thiserror::Error;

/// Errors that can occur when talking to a Dropbeat server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server answered `success: false`
    #[error("API error: {code}")]
    Api { code: ApiErrorCode },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for DropbeatError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_timeout() => DropbeatError::Timeout(e.to_string()),
            ClientError::Request(e) => DropbeatError::Network(e.to_string()),
            ClientError::ServerUnreachable(msg) => DropbeatError::Network(msg),
            ClientError::InvalidUrl(msg) => DropbeatError::Other(format!("invalid URL: {}", msg)),
            ClientError::ServerError { status, message } => {
                DropbeatError::ServerError { status, message }
            }
            ClientError::Api { code } => DropbeatError::Api { code },
            ClientError::ParseError(msg) => DropbeatError::Parse(msg),
        }
    }
}
