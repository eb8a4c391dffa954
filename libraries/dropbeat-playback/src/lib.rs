//! Dropbeat - Play Order & Playlist Management
//!
//! Platform-agnostic playback ordering for Dropbeat.
//!
//! This crate provides:
//! - Repeat modes (Off, All, One)
//! - Shuffle (Fisher-Yates over the active playlist)
//! - A materialized play queue and next-track selection
//! - Playlist collection management (load, reserve/commit, add track)
//! - UI events and callbacks
//!
//! # Architecture
//!
//! `dropbeat-playback` never talks HTTP and never renders:
//! - The backend is reached through `dropbeat_core::PlaylistBackend`
//! - Notifications go through the `Notifier` trait
//! - Mode changes are drained as `ControlEvent`s
//!
//! # Example: Play Order
//!
//! ```rust
//! use dropbeat_core::Track;
//! use dropbeat_playback::{PlayOrderControl, RepeatMode};
//!
//! let tracks = vec![Track::new("a", "A"), Track::new("b", "B"), Track::new("c", "C")];
//!
//! let mut control = PlayOrderControl::default();
//! control.reload_queue(&tracks);
//!
//! assert_eq!(control.pop_next(&tracks[0], &tracks), Some(tracks[1].clone()));
//! assert_eq!(control.pop_next(&tracks[2], &tracks), None);
//!
//! // Repeat all wraps around
//! assert_eq!(control.toggle_repeat(), RepeatMode::All);
//! assert_eq!(control.pop_next(&tracks[2], &tracks), Some(tracks[0].clone()));
//! ```
//!
//! # Example: Playlist Manager
//!
//! ```rust,no_run
//! use dropbeat_playback::{PlaylistCallbacks, PlaylistManager, PlaybackConfig};
//! # use std::sync::Arc;
//! # async fn run(backend: Arc<dyn dropbeat_core::PlaylistBackend>) -> dropbeat_playback::Result<()> {
//! let mut manager = PlaylistManager::new(backend, PlaybackConfig::default());
//!
//! manager.set_callbacks(
//!     PlaylistCallbacks::new().on_first_playlist_loaded(|playlist| {
//!         println!("First playlist: {}", playlist.name);
//!     }),
//! );
//!
//! let summary = manager.load_all_playlists().await?;
//! println!("Loaded {} playlists", summary.loaded);
//! # Ok(())
//! # }
//! ```

mod callbacks;
mod error;
mod events;
mod manager;
mod notify;
mod order;
mod shuffle;
pub mod types;

// Public exports
pub use callbacks::{FirstPlaylistLoadedFn, PlaylistCallbacks, TrackAddedFn};
pub use error::{PlaylistError, Result};
pub use events::ControlEvent;
pub use manager::{CommitParams, LoadSummary, PlaylistManager};
pub use notify::{NoopNotifier, Notifier, TracingNotifier};
pub use order::PlayOrderControl;
pub use types::{ParseRepeatModeError, PlaybackConfig, RepeatMode, ShuffleMode};
