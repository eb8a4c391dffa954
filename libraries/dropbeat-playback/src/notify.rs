//! Notification collaborator
//!
//! Fire-and-forget hooks the manager calls after confirmed changes. The UI
//! layer supplies an implementation that shows a toast.

use dropbeat_core::Track;
use tracing::info;

/// Side-effect hook for user-visible notifications
pub trait Notifier: Send + Sync {
    /// A track was confirmed by the server and added to a playlist
    fn on_track_added(&self, track: &Track);
}

/// Notifier that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn on_track_added(&self, _track: &Track) {}
}

/// Notifier that logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn on_track_added(&self, track: &Track) {
        info!(track = %track.uid, name = %track.name, "Track added");
    }
}
