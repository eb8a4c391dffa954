//! Types for Dropbeat API requests and responses.

use crate::error::{ClientError, Result};
use dropbeat_core::{ApiErrorCode, Playlist, PlaylistId, Track};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to a Dropbeat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://dropbeat.example.com")
    pub url: String,
    /// API version segment used in `/api/{version}/...`
    pub api_version: String,
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config for `url` with default version and timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Override the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self.connect_timeout_secs = connect_timeout_secs;
        self
    }

    /// Validate and return a copy with the URL normalized.
    ///
    /// The URL must be non-empty and use http or https. Trailing slashes
    /// are stripped.
    pub fn normalized(&self) -> Result<Self> {
        if self.url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = self.url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        if self.api_version.is_empty() || self.api_version.contains('/') {
            return Err(ClientError::InvalidUrl(format!(
                "invalid API version: {:?}",
                self.api_version
            )));
        }

        Ok(Self {
            url,
            ..self.clone()
        })
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Body of `POST /track`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddTrackRequest {
    pub uid: String,
    pub name: String,
    pub playlist_uid: String,
}

impl AddTrackRequest {
    pub fn new(playlist: &PlaylistId, track: &Track) -> Self {
        Self {
            uid: track.uid.to_string(),
            name: track.name.clone(),
            playlist_uid: playlist.to_string(),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from `GET /playlist/all`.
#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    pub success: bool,
    #[serde(default)]
    pub list: Option<Vec<PlaylistId>>,
    #[serde(default)]
    pub error: Option<ApiErrorCode>,
}

/// Response from `GET /playlist?uid=`.
#[derive(Debug, Deserialize)]
pub struct PlaylistResponse {
    pub success: bool,
    #[serde(default)]
    pub playlist: Option<Playlist>,
    #[serde(default)]
    pub error: Option<ApiErrorCode>,
}

/// Response from `POST /track`.
#[derive(Debug, Deserialize)]
pub struct TrackResponse {
    pub success: bool,
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub error: Option<ApiErrorCode>,
}

/// Common shape of every API response.
pub(crate) trait ApiEnvelope {
    type Payload;

    fn success(&self) -> bool;
    fn error_code(&mut self) -> Option<ApiErrorCode>;
    fn payload(self) -> Option<Self::Payload>;

    /// Unwrap the payload or surface the server's error code.
    fn into_payload(mut self, what: &str) -> Result<Self::Payload>
    where
        Self: Sized,
    {
        if !self.success() {
            let code = self
                .error_code()
                .unwrap_or_else(|| ApiErrorCode::Unknown(String::new()));
            return Err(ClientError::Api { code });
        }
        self.payload()
            .ok_or_else(|| ClientError::ParseError(format!("{} missing from response", what)))
    }
}

impl ApiEnvelope for PlaylistListResponse {
    type Payload = Vec<PlaylistId>;

    fn success(&self) -> bool {
        self.success
    }

    fn error_code(&mut self) -> Option<ApiErrorCode> {
        self.error.take()
    }

    fn payload(self) -> Option<Self::Payload> {
        self.list
    }
}

impl ApiEnvelope for PlaylistResponse {
    type Payload = Playlist;

    fn success(&self) -> bool {
        self.success
    }

    fn error_code(&mut self) -> Option<ApiErrorCode> {
        self.error.take()
    }

    fn payload(self) -> Option<Self::Payload> {
        self.playlist
    }
}

impl ApiEnvelope for TrackResponse {
    type Payload = Track;

    fn success(&self) -> bool {
        self.success
    }

    fn error_code(&mut self) -> Option<ApiErrorCode> {
        self.error.take()
    }

    fn payload(self) -> Option<Self::Payload> {
        self.track
    }
}
