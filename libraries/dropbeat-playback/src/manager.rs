//! Playlist manager - collection orchestration
//!
//! Owns the user's playlists, the current selection, the single pending
//! reservation, and the play-order controller. Calls the backend for loading
//! and track addition; never mutates local state before the backend confirms.

use crate::{
    callbacks::{FirstLoadLatch, PlaylistCallbacks},
    error::{PlaylistError, Result},
    events::ControlEvent,
    notify::{NoopNotifier, Notifier},
    order::PlayOrderControl,
    types::{PlaybackConfig, RepeatMode, ShuffleMode},
};
use dropbeat_core::{Playlist, PlaylistBackend, PlaylistId, Track};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How to finish a pending reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitParams {
    /// Discard the reservation
    Cancel,

    /// The server created the playlist
    Confirm {
        /// Server-issued identifier
        uid: PlaylistId,
        /// Name accepted by the server
        name: String,
    },
}

impl CommitParams {
    pub fn cancel() -> Self {
        Self::Cancel
    }

    pub fn confirm(uid: impl Into<PlaylistId>, name: impl Into<String>) -> Self {
        Self::Confirm {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// Outcome of `load_all_playlists`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Identifiers returned by the list call
    pub requested: usize,
    /// Playlists added to the collection
    pub loaded: usize,
    /// Individual fetches that failed
    pub failed: usize,
    /// Responses skipped because the uid was already present
    pub duplicates: usize,
}

/// Playlist manager
///
/// Constructed once by the application and passed by reference to whatever
/// needs it.
pub struct PlaylistManager {
    backend: Arc<dyn PlaylistBackend>,
    notifier: Arc<dyn Notifier>,

    /// Committed playlists, in arrival order
    playlists: Vec<Playlist>,

    /// Active playlist (non-owning, by uid)
    current: Option<PlaylistId>,

    /// Single pending-creation slot
    reserved: Option<Playlist>,

    callbacks: PlaylistCallbacks,
    first_loaded: FirstLoadLatch,
    play_order: PlayOrderControl,
}

impl PlaylistManager {
    /// Create a new playlist manager
    pub fn new(backend: Arc<dyn PlaylistBackend>, config: PlaybackConfig) -> Self {
        Self {
            backend,
            notifier: Arc::new(NoopNotifier),
            playlists: Vec::new(),
            current: None,
            reserved: None,
            callbacks: PlaylistCallbacks::default(),
            first_loaded: FirstLoadLatch::new(),
            play_order: PlayOrderControl::new(config),
        }
    }

    /// Use the given notification collaborator
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the play-order controller (e.g. one with a fixed seed)
    pub fn with_play_order(mut self, play_order: PlayOrderControl) -> Self {
        self.play_order = play_order;
        self
    }

    // ===== Loading =====

    /// Load every playlist from the backend
    ///
    /// The id list is fetched first, then every playlist is fetched
    /// concurrently. Arrivals replace the entry with the same uid in place,
    /// new uids are appended in arrival order. The first arrival fires
    /// `on_first_playlist_loaded` exactly once per call.
    ///
    /// A failed list fetch leaves the collection untouched. A failed
    /// individual fetch keeps the previously loaded copy, if any. Only
    /// playlists missing from the new id list are dropped.
    pub async fn load_all_playlists(&mut self) -> Result<LoadSummary> {
        let ids = self.backend.list_playlists().await?;
        debug!(count = ids.len(), "Fetched playlist list");

        self.first_loaded.rearm();

        let mut summary = LoadSummary {
            requested: ids.len(),
            ..LoadSummary::default()
        };
        let mut keep: HashSet<PlaylistId> = ids.iter().cloned().collect();
        let mut arrived = HashSet::new();

        let mut pending: FuturesUnordered<_> = ids
            .into_iter()
            .map(|uid| {
                let backend = Arc::clone(&self.backend);
                async move {
                    let result = backend.fetch_playlist(&uid).await;
                    (uid, result)
                }
            })
            .collect();

        while let Some((uid, result)) = pending.next().await {
            match result {
                Ok(mut playlist) => {
                    if playlist.uid.is_none() {
                        playlist.uid = Some(uid);
                    }
                    if self.apply_loaded(playlist, &mut arrived) {
                        summary.loaded += 1;
                    } else {
                        summary.duplicates += 1;
                    }
                }
                Err(e) => {
                    warn!(playlist = %uid, error = %e, "Failed to load playlist");
                    summary.failed += 1;
                }
            }
        }

        keep.extend(arrived);
        self.retain_listed(&keep);

        info!(
            requested = summary.requested,
            loaded = summary.loaded,
            failed = summary.failed,
            duplicates = summary.duplicates,
            "Playlists loaded"
        );

        Ok(summary)
    }

    /// Store a fetched playlist; `false` if its uid already arrived this load
    fn apply_loaded(&mut self, mut playlist: Playlist, arrived: &mut HashSet<PlaylistId>) -> bool {
        let Some(uid) = playlist.uid.clone() else {
            return false;
        };

        if !arrived.insert(uid.clone()) {
            warn!(playlist = %uid, "Duplicate playlist response ignored");
            return false;
        }

        playlist.editing = false;
        debug!(playlist = %uid, tracks = playlist.len(), "Playlist loaded");

        let index = match self
            .playlists
            .iter()
            .position(|p| p.uid.as_ref() == Some(&uid))
        {
            Some(index) => {
                self.playlists[index] = playlist;
                index
            }
            None => {
                self.playlists.push(playlist);
                self.playlists.len() - 1
            }
        };

        if self.first_loaded.try_fire() {
            if self.current.is_none() {
                self.current = Some(uid.clone());
            }
            if let Some(cb) = self.callbacks.on_first_playlist_loaded.as_mut() {
                cb(&self.playlists[index]);
            }
        }

        if self.current.as_ref() == Some(&uid) {
            self.reload_queue();
        }

        true
    }

    /// Drop committed playlists the server no longer lists
    fn retain_listed(&mut self, keep: &HashSet<PlaylistId>) {
        let before = self.playlists.len();
        self.playlists
            .retain(|p| p.uid.as_ref().is_some_and(|uid| keep.contains(uid)));
        if self.playlists.len() != before {
            debug!(
                removed = before - self.playlists.len(),
                "Dropped playlists no longer listed"
            );
        }

        if self
            .current
            .as_ref()
            .is_some_and(|uid| !keep.contains(uid))
        {
            self.current = None;
            self.play_order.clear_queue();
        }
    }

    /// Register UI callbacks
    ///
    /// Handlers not set in `callbacks` stay as they were. A new
    /// `on_first_playlist_loaded` is invoked immediately with the first loaded
    /// playlist if the collection is already populated.
    pub fn set_callbacks(&mut self, callbacks: PlaylistCallbacks) {
        let replay = callbacks.on_first_playlist_loaded.is_some();
        self.callbacks.merge(callbacks);

        if replay {
            if let (Some(cb), Some(first)) = (
                self.callbacks.on_first_playlist_loaded.as_mut(),
                self.playlists.first(),
            ) {
                cb(first);
            }
        }
    }

    // ===== Reservation =====

    /// Reserve a new, uncommitted playlist for editing
    pub fn prepare(&mut self) -> Result<&Playlist> {
        if self.reserved.is_some() {
            return Err(PlaylistError::ReservationAlreadyPending);
        }
        debug!("Playlist reserved");
        Ok(&*self.reserved.insert(Playlist::reserved()))
    }

    /// Whether a reservation is held
    pub fn prepared(&self) -> bool {
        self.reserved.is_some()
    }

    /// The pending reservation, if any
    pub fn reservation(&self) -> Option<&Playlist> {
        self.reserved.as_ref()
    }

    /// Finish the pending reservation
    pub fn commit(&mut self, params: CommitParams) -> Result<()> {
        match params {
            CommitParams::Cancel => {
                self.reserved
                    .take()
                    .ok_or(PlaylistError::NoPendingReservation)?;
                debug!("Playlist reservation cancelled");
                Ok(())
            }
            CommitParams::Confirm { uid, name } => {
                if self.reserved.is_none() {
                    return Err(PlaylistError::NoPendingReservation);
                }
                if self.get_playlist(&uid).is_some() {
                    return Err(PlaylistError::DuplicatePlaylist(uid));
                }

                let mut playlist = self
                    .reserved
                    .take()
                    .ok_or(PlaylistError::NoPendingReservation)?;
                playlist.uid = Some(uid.clone());
                playlist.name = name;
                playlist.editing = false;

                info!(playlist = %uid, name = %playlist.name, "Playlist committed");
                self.playlists.push(playlist);
                Ok(())
            }
        }
    }

    // ===== Collection =====

    /// All committed playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a playlist by uid
    pub fn get_playlist(&self, uid: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.uid.as_ref() == Some(uid))
    }

    /// Remove a playlist by uid; no-op if absent
    ///
    /// Removing the current playlist clears the selection and the queue.
    pub fn remove_playlist(&mut self, uid: &PlaylistId) -> Option<Playlist> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.uid.as_ref() == Some(uid))?;
        let removed = self.playlists.remove(index);

        if self.current.as_ref() == Some(uid) {
            self.current = None;
            self.play_order.clear_queue();
        }

        debug!(playlist = %uid, "Playlist removed");
        Some(removed)
    }

    /// Select the active playlist and rebuild the queue from it
    pub fn set_current_playlist(&mut self, uid: &PlaylistId) -> Result<()> {
        if self.get_playlist(uid).is_none() {
            return Err(PlaylistError::PlaylistNotFound(uid.clone()));
        }
        self.current = Some(uid.clone());
        self.reload_queue();
        Ok(())
    }

    /// The active playlist
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current.as_ref().and_then(|uid| self.get_playlist(uid))
    }

    // ===== Tracks =====

    /// Add a track to the current playlist through the backend
    ///
    /// The local playlist changes only after the server confirms. On success
    /// the notifier and `on_track_added` run and the queue is rebuilt.
    pub async fn add_new_track(&mut self, track: Track) -> Result<Track> {
        let playlist_uid = self
            .current
            .clone()
            .ok_or(PlaylistError::NoCurrentPlaylist)?;
        if self.get_playlist(&playlist_uid).is_none() {
            return Err(PlaylistError::PlaylistNotFound(playlist_uid));
        }

        debug!(playlist = %playlist_uid, track = %track.uid, "Adding track");

        let confirmed = match self.backend.add_track(&playlist_uid, &track).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!(playlist = %playlist_uid, track = %track.uid, error = %e, "Failed to add track");
                return Err(e.into());
            }
        };

        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.uid.as_ref() == Some(&playlist_uid))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(playlist_uid.clone()))?;

        if playlist.contains(&confirmed.uid) {
            warn!(playlist = %playlist_uid, track = %confirmed.uid, "Track already in playlist");
        } else {
            playlist.push(confirmed.clone());
        }

        self.notifier.on_track_added(&confirmed);
        if let Some(cb) = self.callbacks.on_track_added.as_mut() {
            cb(&confirmed);
        }

        self.reload_queue();
        Ok(confirmed)
    }

    // ===== Play order =====

    /// Read access to the play-order controller
    pub fn play_order(&self) -> &PlayOrderControl {
        &self.play_order
    }

    /// Rebuild the play queue from the current playlist
    pub fn reload_queue(&mut self) {
        let tracks = current_tracks(&self.playlists, self.current.as_ref());
        self.play_order.reload_queue(tracks);
    }

    /// Cycle repeat mode
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        self.play_order.toggle_repeat()
    }

    /// Cycle shuffle mode and rebuild the queue
    pub fn toggle_shuffle(&mut self) -> ShuffleMode {
        let tracks = current_tracks(&self.playlists, self.current.as_ref());
        self.play_order.toggle_shuffle(tracks)
    }

    /// Track to play after `current`, per the active modes
    pub fn pop_next(&mut self, current: &Track) -> Option<Track> {
        let tracks = current_tracks(&self.playlists, self.current.as_ref());
        self.play_order.pop_next(current, tracks)
    }

    /// Drain controller events for the UI
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.play_order.drain_events()
    }
}

fn current_tracks<'a>(playlists: &'a [Playlist], current: Option<&PlaylistId>) -> &'a [Track] {
    current
        .and_then(|uid| playlists.iter().find(|p| p.uid.as_ref() == Some(uid)))
        .map(|p| p.tracks.as_slice())
        .unwrap_or_default()
}
