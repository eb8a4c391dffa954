//! Play-order control
//!
//! Decides what plays after the current track. Owns the repeat and shuffle
//! modes and the materialized play queue derived from the active playlist.
//!
//! ```text
//! Active playlist:  [A, B, C, D]
//!                        │ reload_queue()
//!                        ▼
//! Play queue:       [A, B, C, D]   (shuffle off)
//!                   [C, A, D, B]   (shuffle on)
//!                        │ pop_next(current)
//!                        ▼
//!                   next track, or None at the end with repeat off
//! ```
//!
//! The queue is a cache. It is rebuilt whenever the shuffle mode toggles or
//! the active playlist's tracks change, and never written back to the playlist.

use crate::events::ControlEvent;
use crate::shuffle::shuffle_queue;
use crate::types::{PlaybackConfig, RepeatMode, ShuffleMode};
use dropbeat_core::Track;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Play-order controller
#[derive(Debug)]
pub struct PlayOrderControl {
    /// Materialized queue (canonical or shuffled order)
    play_queue: Vec<Track>,

    repeat: RepeatMode,

    shuffle: ShuffleMode,

    rng: StdRng,

    /// Events for the UI, drained by the owner
    pending_events: Vec<ControlEvent>,
}

impl PlayOrderControl {
    /// Create a controller with an entropy-seeded RNG
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a controller with a fixed shuffle seed
    pub fn with_seed(config: PlaybackConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            play_queue: Vec::new(),
            repeat: config.repeat,
            shuffle: config.shuffle,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Modes =====

    /// Cycle repeat mode: Off → All → One → Off
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.next();
        self.emit_repeat_changed();
        self.repeat
    }

    /// Set repeat mode directly
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.repeat != mode {
            self.repeat = mode;
            self.emit_repeat_changed();
        }
    }

    /// Get current repeat mode
    pub fn get_repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Cycle shuffle mode: Off → On → Off
    ///
    /// Always reloads the queue from `tracks`, including when shuffle turns
    /// off, so the queue is back in canonical order.
    pub fn toggle_shuffle(&mut self, tracks: &[Track]) -> ShuffleMode {
        self.shuffle = self.shuffle.next();
        self.emit_shuffle_changed();
        self.reload_queue(tracks);
        self.shuffle
    }

    /// Set shuffle mode directly
    ///
    /// Reloads the queue only if the mode changes.
    pub fn set_shuffle(&mut self, mode: ShuffleMode, tracks: &[Track]) {
        if self.shuffle != mode {
            self.shuffle = mode;
            self.emit_shuffle_changed();
            self.reload_queue(tracks);
        }
    }

    /// Get current shuffle mode
    pub fn get_shuffle(&self) -> ShuffleMode {
        self.shuffle
    }

    // ===== Queue =====

    /// Rebuild the play queue from the active playlist's tracks
    ///
    /// The playlist slice is copied; only the copy is permuted.
    pub fn reload_queue(&mut self, tracks: &[Track]) {
        let mut queue = tracks.to_vec();
        shuffle_queue(&mut queue, self.shuffle, &mut self.rng);
        self.play_queue = queue;

        debug!(
            length = self.play_queue.len(),
            shuffle = ?self.shuffle,
            "Play queue reloaded"
        );
        self.emit_queue_reloaded();
    }

    /// Drop the queue (no active playlist)
    pub fn clear_queue(&mut self) {
        self.play_queue.clear();
        self.emit_queue_reloaded();
    }

    /// Get the play queue
    pub fn get_queue(&self) -> &[Track] {
        &self.play_queue
    }

    /// Number of tracks in the play queue
    pub fn queue_len(&self) -> usize {
        self.play_queue.len()
    }

    /// Position of `track` in the play queue, matched by uid
    pub fn current_position(&self, track: &Track) -> Option<usize> {
        self.play_queue.iter().position(|t| t.uid == track.uid)
    }

    /// Track to play after `current`
    ///
    /// - Repeat one: `current` again, queue untouched.
    /// - Not at the end: the following queue entry.
    /// - At the end with repeat all: reloads from `tracks` (re-shuffling if
    ///   enabled) and returns the new first entry.
    /// - At the end with repeat off: `None`, playback stops.
    ///
    /// A `current` that is not in the queue (e.g. the queue was reloaded
    /// under it) is treated as positioned before the start, so the first
    /// queue entry is returned.
    pub fn pop_next(&mut self, current: &Track, tracks: &[Track]) -> Option<Track> {
        match self.repeat {
            RepeatMode::One => return Some(current.clone()),
            RepeatMode::Off | RepeatMode::All => {}
        }

        let Some(pos) = self.current_position(current) else {
            debug!(track = %current.uid, "Current track not in queue, starting from head");
            return self.play_queue.first().cloned();
        };

        if pos + 1 < self.play_queue.len() {
            return Some(self.play_queue[pos + 1].clone());
        }

        // End of queue
        match self.repeat {
            RepeatMode::All => {
                self.reload_queue(tracks);
                self.play_queue.first().cloned()
            }
            RepeatMode::Off | RepeatMode::One => None,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_repeat_changed(&mut self) {
        self.pending_events
            .push(ControlEvent::RepeatChanged { mode: self.repeat });
    }

    fn emit_shuffle_changed(&mut self) {
        self.pending_events
            .push(ControlEvent::ShuffleChanged { mode: self.shuffle });
    }

    fn emit_queue_reloaded(&mut self) {
        self.pending_events.push(ControlEvent::QueueReloaded {
            length: self.play_queue.len(),
            shuffled: self.shuffle.is_on(),
        });
    }
}

impl Default for PlayOrderControl {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
