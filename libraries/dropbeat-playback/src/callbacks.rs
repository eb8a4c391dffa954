//! Consumer callbacks and the first-arrival latch

use dropbeat_core::{Playlist, Track};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handler for the first playlist to finish loading
pub type FirstPlaylistLoadedFn = Box<dyn FnMut(&Playlist) + Send>;

/// Handler for a server-confirmed track addition
pub type TrackAddedFn = Box<dyn FnMut(&Track) + Send>;

/// Callbacks registered by the UI
///
/// Fields left as `None` do not replace an already registered handler.
#[derive(Default)]
pub struct PlaylistCallbacks {
    pub on_first_playlist_loaded: Option<FirstPlaylistLoadedFn>,
    pub on_track_added: Option<TrackAddedFn>,
}

impl PlaylistCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first-playlist-loaded handler
    pub fn on_first_playlist_loaded(mut self, f: impl FnMut(&Playlist) + Send + 'static) -> Self {
        self.on_first_playlist_loaded = Some(Box::new(f));
        self
    }

    /// Set the track-added handler
    pub fn on_track_added(mut self, f: impl FnMut(&Track) + Send + 'static) -> Self {
        self.on_track_added = Some(Box::new(f));
        self
    }

    /// Move every handler set in `other` into `self`
    pub(crate) fn merge(&mut self, other: PlaylistCallbacks) {
        if let Some(f) = other.on_first_playlist_loaded {
            self.on_first_playlist_loaded = Some(f);
        }
        if let Some(f) = other.on_track_added {
            self.on_track_added = Some(f);
        }
    }
}

impl fmt::Debug for PlaylistCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistCallbacks")
            .field(
                "on_first_playlist_loaded",
                &self.on_first_playlist_loaded.is_some(),
            )
            .field("on_track_added", &self.on_track_added.is_some())
            .finish()
    }
}

/// One-shot latch guarding the first-arrival notification
///
/// `try_fire` returns `true` for exactly one caller until `rearm`.
#[derive(Debug, Default)]
pub(crate) struct FirstLoadLatch {
    fired: AtomicBool,
}

impl FirstLoadLatch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim the latch; `true` only for the first claim
    pub(crate) fn try_fire(&self) -> bool {
        !self.fired.swap(true, Ordering::AcqRel)
    }

    /// Reset for a new load cycle
    pub(crate) fn rearm(&self) {
        self.fired.store(false, Ordering::Release);
    }
}
