//! Dropbeat Core
//!
//! Platform-agnostic core types, traits, and error handling for Dropbeat.
//!
//! This crate provides the foundational building blocks shared by the
//! playback controller, the HTTP client, and the applications.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, and their identifiers
//! - **Backend Contract**: the `PlaylistBackend` trait the playlist manager calls into
//! - **Error Handling**: Unified `DropbeatError` and `Result` types, plus the
//!   opaque `ApiErrorCode` values reported by the server
//!
//! # Example
//!
//! ```rust
//! use dropbeat_core::types::{Playlist, PlaylistId, Track, TrackId};
//!
//! let mut playlist = Playlist::new(PlaylistId::new("p1"), "Mix");
//! playlist.push(Track::new(TrackId::new("t1"), "Intro"));
//!
//! assert_eq!(playlist.len(), 1);
//! assert!(playlist.is_committed());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{DropbeatError, Result};
pub use traits::PlaylistBackend;
pub use types::{ApiErrorCode, Playlist, PlaylistId, Track, TrackId};
