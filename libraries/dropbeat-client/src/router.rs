//! Endpoint paths for the Dropbeat API.

use crate::error::{ClientError, Result};
use url::Url;

/// Named API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Playlist,
    PlaylistList,
    Track,
}

impl Endpoint {
    /// Path relative to the versioned API root
    pub fn path(self) -> &'static str {
        match self {
            Self::Playlist => "playlist",
            Self::PlaylistList => "playlist/all",
            Self::Track => "track",
        }
    }
}

/// Builds `/api/{version}/{path}` URLs against a base server URL.
#[derive(Debug, Clone)]
pub struct ApiRouter {
    base_url: String,
    version: String,
}

impl ApiRouter {
    /// `base_url` must already be normalized (no trailing slash).
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Server-relative path, e.g. `/api/v1/playlist/all`.
    pub fn get_path(&self, endpoint: Endpoint) -> String {
        format!("/api/{}/{}", self.version, endpoint.path())
    }

    /// Absolute URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, self.get_path(endpoint));
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_versioned() {
        let router = ApiRouter::new("https://dropbeat.net", "v1");

        assert_eq!(router.get_path(Endpoint::Playlist), "/api/v1/playlist");
        assert_eq!(router.get_path(Endpoint::PlaylistList), "/api/v1/playlist/all");
        assert_eq!(router.get_path(Endpoint::Track), "/api/v1/track");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let router = ApiRouter::new("http://localhost:8080/dropbeat", "v2");
        let url = router.url(Endpoint::Track).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/dropbeat/api/v2/track");
    }
}
