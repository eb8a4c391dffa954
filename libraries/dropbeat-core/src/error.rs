//! Core error types for Dropbeat

use crate::types::ApiErrorCode;
use thiserror::Error;

/// Result type alias using `DropbeatError`
pub type Result<T> = std::result::Result<T, DropbeatError>;

/// Core error type for Dropbeat
///
/// Backend implementations convert their transport errors into this type so
/// the playlist manager never depends on a concrete HTTP stack.
#[derive(Error, Debug)]
pub enum DropbeatError {
    /// Request could not be delivered
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server answered with `success: false`
    #[error("API error: {code}")]
    Api {
        /// Error code reported by the server
        code: ApiErrorCode,
    },

    /// Server answered with a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl DropbeatError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Backend error code, when the server reported one
    pub fn api_code(&self) -> Option<&ApiErrorCode> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_code() {
        let err = DropbeatError::Api {
            code: ApiErrorCode::TrackAlreadyExist,
        };
        assert_eq!(err.api_code(), Some(&ApiErrorCode::TrackAlreadyExist));
        assert_eq!(err.to_string(), "API error: 106 (track already exists)");
    }

    #[test]
    fn not_found_formats_entity() {
        let err = DropbeatError::not_found("Playlist", "p9");
        assert_eq!(err.to_string(), "Playlist not found: p9");
        assert!(err.api_code().is_none());
    }
}
