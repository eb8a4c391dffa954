//! Playlist domain types

use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// A playlist without a `uid` is a reservation: created locally and not yet
/// acknowledged by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Server-issued identifier (`None` while reserved)
    pub uid: Option<PlaylistId>,

    /// Playlist name
    #[serde(default)]
    pub name: String,

    /// Tracks in playback order
    #[serde(default)]
    pub tracks: Vec<Track>,

    /// Whether the playlist is being edited in the UI
    #[serde(default, skip_serializing)]
    pub editing: bool,
}

impl Playlist {
    /// Create a committed, empty playlist
    pub fn new(uid: impl Into<PlaylistId>, name: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            name: name.into(),
            tracks: Vec::new(),
            editing: false,
        }
    }

    /// Create a committed playlist with tracks (for backend responses)
    pub fn with_tracks(
        uid: impl Into<PlaylistId>,
        name: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            uid: Some(uid.into()),
            name: name.into(),
            tracks,
            editing: false,
        }
    }

    /// Create a reserved playlist awaiting server confirmation
    pub fn reserved() -> Self {
        Self {
            uid: None,
            name: String::new(),
            tracks: Vec::new(),
            editing: true,
        }
    }

    /// Whether the server has issued an identifier for this playlist
    pub fn is_committed(&self) -> bool {
        self.uid.is_some()
    }

    /// Append a track
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Check whether a track with the given ID is present
    pub fn contains(&self, uid: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.uid == uid)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
