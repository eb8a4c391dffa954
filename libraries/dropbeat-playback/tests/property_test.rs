//! Property-based tests for play-order control
//!
//! Uses proptest to verify queue and mode invariants across many random inputs.

use dropbeat_core::Track;
use dropbeat_playback::{
    ControlEvent, PlayOrderControl, PlaybackConfig, RepeatMode, ShuffleMode,
};
use proptest::prelude::*;

// ===== Helpers =====

/// Playlists with unique track ids
fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::hash_set("[a-z0-9]{1,10}", 0..40).prop_map(|ids| {
        ids.into_iter()
            .map(|id| {
                let name = format!("Song {}", id);
                Track::new(id.as_str(), name)
            })
            .collect()
    })
}

fn arbitrary_repeat() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::Off),
        Just(RepeatMode::All),
        Just(RepeatMode::One),
    ]
}

fn sorted_ids(tracks: &[Track]) -> Vec<String> {
    let mut ids: Vec<String> = tracks.iter().map(|t| t.uid.to_string()).collect();
    ids.sort();
    ids
}

// ===== Property Tests =====

proptest! {
    /// Property: With shuffle off the queue equals the playlist exactly
    #[test]
    fn unshuffled_queue_matches_playlist(tracks in arbitrary_tracks()) {
        let mut control = PlayOrderControl::default();
        control.reload_queue(&tracks);

        prop_assert_eq!(control.get_queue(), tracks.as_slice());
    }

    /// Property: With shuffle on the queue is a permutation of the playlist
    #[test]
    fn shuffled_queue_is_permutation(tracks in arbitrary_tracks(), seed in any::<u64>()) {
        let config = PlaybackConfig { shuffle: ShuffleMode::On, ..Default::default() };
        let mut control = PlayOrderControl::with_seed(config, seed);
        control.reload_queue(&tracks);

        prop_assert_eq!(control.queue_len(), tracks.len());
        prop_assert_eq!(sorted_ids(control.get_queue()), sorted_ids(&tracks));
    }

    /// Property: Three repeat toggles return to the starting mode
    #[test]
    fn repeat_cycles_in_three(start in arbitrary_repeat()) {
        let mut control = PlayOrderControl::new(PlaybackConfig { repeat: start, ..Default::default() });

        let first = control.toggle_repeat();
        let second = control.toggle_repeat();
        let third = control.toggle_repeat();

        prop_assert_ne!(first, start);
        prop_assert_ne!(second, start);
        prop_assert_ne!(first, second);
        prop_assert_eq!(third, start);
    }

    /// Property: Every shuffle toggle reloads the queue
    #[test]
    fn shuffle_toggle_always_reloads(tracks in arbitrary_tracks(), toggles in 1usize..8) {
        let mut control = PlayOrderControl::default();

        for i in 0..toggles {
            let mode = control.toggle_shuffle(&tracks);
            let expected = if i % 2 == 0 { ShuffleMode::On } else { ShuffleMode::Off };
            prop_assert_eq!(mode, expected);

            let events = control.drain_events();
            let reloaded = events.iter().any(|e| matches!(
                e,
                ControlEvent::QueueReloaded { length, .. } if *length == tracks.len()
            ));
            prop_assert!(reloaded, "toggle {} did not reload the queue", i);
        }

        if toggles % 2 == 0 {
            prop_assert_eq!(control.get_queue(), tracks.as_slice());
        }
    }

    /// Property: Repeat one always returns the given track and leaves the queue alone
    #[test]
    fn repeat_one_returns_current(tracks in arbitrary_tracks(), index in any::<prop::sample::Index>()) {
        prop_assume!(!tracks.is_empty());
        let mut control = PlayOrderControl::new(PlaybackConfig { repeat: RepeatMode::One, ..Default::default() });
        control.reload_queue(&tracks);
        let before = control.get_queue().to_vec();

        let current = index.get(&tracks).clone();
        prop_assert_eq!(control.pop_next(&current, &tracks), Some(current));
        prop_assert_eq!(control.get_queue(), before.as_slice());
    }

    /// Property: Walking with repeat off visits every track once, then stops
    #[test]
    fn walk_visits_queue_in_order(tracks in arbitrary_tracks(), seed in any::<u64>()) {
        prop_assume!(!tracks.is_empty());
        let config = PlaybackConfig { shuffle: ShuffleMode::On, ..Default::default() };
        let mut control = PlayOrderControl::with_seed(config, seed);
        control.reload_queue(&tracks);

        let queue = control.get_queue().to_vec();
        let mut current = queue[0].clone();
        let mut visited = vec![current.clone()];
        while let Some(next) = control.pop_next(&current, &tracks) {
            visited.push(next.clone());
            current = next;
            prop_assert!(visited.len() <= tracks.len());
        }

        prop_assert_eq!(visited, queue);
    }

    /// Property: Repeat all at the end yields the head of the reloaded queue
    #[test]
    fn repeat_all_wraps_to_reloaded_head(tracks in arbitrary_tracks(), seed in any::<u64>(), shuffle in any::<bool>()) {
        prop_assume!(!tracks.is_empty());
        let config = PlaybackConfig { repeat: RepeatMode::All, shuffle: ShuffleMode::from(shuffle) };
        let mut control = PlayOrderControl::with_seed(config, seed);
        control.reload_queue(&tracks);

        let last = control.get_queue().last().cloned().unwrap();
        let next = control.pop_next(&last, &tracks);

        prop_assert_eq!(next.as_ref(), control.get_queue().first());
        prop_assert_eq!(control.queue_len(), tracks.len());
    }
}
