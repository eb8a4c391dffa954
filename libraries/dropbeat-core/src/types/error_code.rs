//! Error codes reported by the Dropbeat API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in a `success: false` response
///
/// The core never acts on these; they are passed through to the UI so it
/// can pick a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiErrorCode {
    /// `100`: email already registered
    DuplicatedEmail,
    /// `101`: malformed email
    InvalidEmail,
    /// `102`: password too short
    PasswordTooShort,
    /// `103`: no account for email
    EmailNotExist,
    /// `104`: wrong password
    PasswordMismatch,
    /// `105`: playlist name taken
    DuplicatedPlaylistName,
    /// `106`: track already in playlist
    TrackAlreadyExist,
    /// `107`: unknown playlist
    PlaylistNotExist,
    /// `108`: unknown track
    TrackNotExist,
    /// `109`: search result not ready
    ResultNotReady,
    /// Code not known to this client
    Unknown(String),
}

impl ApiErrorCode {
    /// Parse a wire code
    pub fn from_code(code: &str) -> Self {
        match code {
            "100" => Self::DuplicatedEmail,
            "101" => Self::InvalidEmail,
            "102" => Self::PasswordTooShort,
            "103" => Self::EmailNotExist,
            "104" => Self::PasswordMismatch,
            "105" => Self::DuplicatedPlaylistName,
            "106" => Self::TrackAlreadyExist,
            "107" => Self::PlaylistNotExist,
            "108" => Self::TrackNotExist,
            "109" => Self::ResultNotReady,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire representation
    pub fn as_code(&self) -> &str {
        match self {
            Self::DuplicatedEmail => "100",
            Self::InvalidEmail => "101",
            Self::PasswordTooShort => "102",
            Self::EmailNotExist => "103",
            Self::PasswordMismatch => "104",
            Self::DuplicatedPlaylistName => "105",
            Self::TrackAlreadyExist => "106",
            Self::PlaylistNotExist => "107",
            Self::TrackNotExist => "108",
            Self::ResultNotReady => "109",
            Self::Unknown(code) => code,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DuplicatedEmail => "duplicated email",
            Self::InvalidEmail => "invalid email",
            Self::PasswordTooShort => "password too short",
            Self::EmailNotExist => "email does not exist",
            Self::PasswordMismatch => "password mismatch",
            Self::DuplicatedPlaylistName => "duplicated playlist name",
            Self::TrackAlreadyExist => "track already exists",
            Self::PlaylistNotExist => "playlist does not exist",
            Self::TrackNotExist => "track does not exist",
            Self::ResultNotReady => "result not ready",
            Self::Unknown(_) => "unknown error",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_code(), self.description())
    }
}

impl From<String> for ApiErrorCode {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<ApiErrorCode> for String {
    fn from(code: ApiErrorCode) -> Self {
        code.as_code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for code in ["100", "105", "106", "107", "108", "109"] {
            assert_eq!(ApiErrorCode::from_code(code).as_code(), code);
        }
    }

    #[test]
    fn unknown_code_is_preserved() {
        let code = ApiErrorCode::from_code("999");
        assert_eq!(code, ApiErrorCode::Unknown("999".to_string()));
        assert_eq!(code.to_string(), "999 (unknown error)");
    }

    #[test]
    fn deserializes_from_string() {
        let code: ApiErrorCode = serde_json::from_str("\"105\"").unwrap();
        assert_eq!(code, ApiErrorCode::DuplicatedPlaylistName);
    }
}
