//! Control Events
//!
//! Event-based communication for UI synchronization. The UI drains these to
//! update the repeat/shuffle toggles and re-render the queue.

use crate::types::{RepeatMode, ShuffleMode};
use serde::{Deserialize, Serialize};

/// Events emitted by the play-order controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Repeat mode changed
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Shuffle mode changed
    ShuffleChanged {
        /// The new shuffle mode
        mode: ShuffleMode,
    },

    /// Play queue was rebuilt from the active playlist
    QueueReloaded {
        /// New queue length
        length: usize,
        /// Whether the new queue is shuffled
        shuffled: bool,
    },
}
