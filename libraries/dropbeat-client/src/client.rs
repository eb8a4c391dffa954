//! Dropbeat server client.

use crate::error::{ClientError, Result};
use crate::router::{ApiRouter, Endpoint};
use crate::types::{
    AddTrackRequest, ApiEnvelope, ClientConfig, PlaylistListResponse, PlaylistResponse,
    TrackResponse,
};
use async_trait::async_trait;
use dropbeat_core::{Playlist, PlaylistBackend, PlaylistId, Track};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for a Dropbeat server.
///
/// Implements [`PlaylistBackend`] so it can be handed straight to the
/// playlist manager.
///
/// # Example
///
/// ```ignore
/// use dropbeat_client::{ClientConfig, DropbeatClient};
///
/// let client = DropbeatClient::new(ClientConfig::new("https://dropbeat.example.com"))?;
/// let uids = client.list_playlists().await?;
/// println!("Server has {} playlists", uids.len());
/// ```
#[derive(Debug, Clone)]
pub struct DropbeatClient {
    http: Client,
    router: ApiRouter,
}

impl DropbeatClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.normalized()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("Dropbeat/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        info!(url = %config.url, version = %config.api_version, "Created Dropbeat client");

        Ok(Self {
            http,
            router: ApiRouter::new(config.url, config.api_version),
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        self.router.base_url()
    }

    /// Get the endpoint router.
    pub fn router(&self) -> &ApiRouter {
        &self.router
    }

    /// Fetch the uids of every playlist of the current user.
    pub async fn list_playlists(&self) -> Result<Vec<PlaylistId>> {
        let url = self.router.url(Endpoint::PlaylistList)?;
        debug!(url = %url, "Fetching playlist list");

        let body: PlaylistListResponse = self.send(self.http.get(url)).await?;
        let list = body.into_payload("list")?;

        debug!(count = list.len(), "Fetched playlist list");
        Ok(list)
    }

    /// Fetch a single playlist with its tracks.
    pub async fn fetch_playlist(&self, uid: &PlaylistId) -> Result<Playlist> {
        let url = self.router.url(Endpoint::Playlist)?;
        debug!(url = %url, uid = %uid, "Fetching playlist");

        let request = self.http.get(url).query(&[("uid", uid.as_str())]);
        let body: PlaylistResponse = self.send(request).await?;
        let playlist = body.into_payload("playlist")?;

        debug!(uid = %uid, tracks = playlist.tracks.len(), "Fetched playlist");
        Ok(playlist)
    }

    /// Add a track to a playlist; returns the server-confirmed track.
    pub async fn add_track(&self, playlist: &PlaylistId, track: &Track) -> Result<Track> {
        let url = self.router.url(Endpoint::Track)?;
        debug!(url = %url, playlist = %playlist, track = %track.uid, "Adding track");

        let request = self.http.post(url).json(&AddTrackRequest::new(playlist, track));
        let body: TrackResponse = self.send(request).await?;
        body.into_payload("track")
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::ParseError(format!("Failed to parse response: {}", e)))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl PlaylistBackend for DropbeatClient {
    async fn list_playlists(&self) -> dropbeat_core::Result<Vec<PlaylistId>> {
        Ok(DropbeatClient::list_playlists(self).await?)
    }

    async fn fetch_playlist(&self, uid: &PlaylistId) -> dropbeat_core::Result<Playlist> {
        Ok(DropbeatClient::fetch_playlist(self, uid).await?)
    }

    async fn add_track(&self, playlist: &PlaylistId, track: &Track) -> dropbeat_core::Result<Track> {
        Ok(DropbeatClient::add_track(self, playlist, track).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_invalid_url() {
        assert!(DropbeatClient::new(ClientConfig::new("")).is_err());
        assert!(DropbeatClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_client_normalizes_url() {
        let client = DropbeatClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.url(), "https://example.com");
        assert_eq!(client.router().version(), "v1");
    }
}
