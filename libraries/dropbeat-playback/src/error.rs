//! Error types for playlist management

use dropbeat_core::{DropbeatError, PlaylistId};
use thiserror::Error;

/// Playlist manager errors
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// `commit` called with no reservation held
    #[error("No pending playlist reservation")]
    NoPendingReservation,

    /// `prepare` called while a reservation is already held
    #[error("A playlist reservation is already pending")]
    ReservationAlreadyPending,

    /// Operation needs an active playlist
    #[error("No current playlist selected")]
    NoCurrentPlaylist,

    /// Playlist is not in the collection
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// A committed playlist with this uid already exists
    #[error("Playlist already exists: {0}")]
    DuplicatePlaylist(PlaylistId),

    /// Backend call failed
    #[error("Backend error: {0}")]
    Backend(#[from] DropbeatError),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
