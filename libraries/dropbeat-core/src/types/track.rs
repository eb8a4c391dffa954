//! Track domain type

use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A playable track
///
/// Immutable once created. Owned by the playlist that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub uid: TrackId,

    /// Display name
    pub name: String,
}

impl Track {
    /// Create a new track
    pub fn new(uid: impl Into<TrackId>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_from_backend_json_ignores_extra_fields() {
        let track: Track =
            serde_json::from_str(r#"{"uid":"yt-123","name":"Song","type":"youtube"}"#).unwrap();
        assert_eq!(track.uid, TrackId::new("yt-123"));
        assert_eq!(track.name, "Song");
    }
}
