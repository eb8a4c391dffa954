//! Core traits for Dropbeat

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Track};
use async_trait::async_trait;

/// Backend collaborator for playlist data
///
/// This trait abstracts the remote API so the playlist manager can run
/// against the HTTP client, an in-memory fake, or anything else.
///
/// Implementations must not retry; a failed call leaves the caller's state
/// untouched.
#[async_trait]
pub trait PlaylistBackend: Send + Sync {
    /// List the identifiers of every playlist owned by the current user
    async fn list_playlists(&self) -> Result<Vec<PlaylistId>>;

    /// Fetch a single playlist with its tracks
    async fn fetch_playlist(&self, uid: &PlaylistId) -> Result<Playlist>;

    /// Add a track to a playlist
    ///
    /// Returns the track as confirmed by the server.
    async fn add_track(&self, playlist: &PlaylistId, track: &Track) -> Result<Track>;
}
