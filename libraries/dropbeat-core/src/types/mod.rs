//! Domain types for Dropbeat
//!
//! Tracks and playlists are plain value holders built from backend
//! responses. Identifiers are string newtypes issued by the server.

mod error_code;
mod ids;
mod playlist;
mod track;

pub use error_code::ApiErrorCode;
pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::Track;
