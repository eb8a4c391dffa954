//! Shuffle algorithm for queue randomization
//!
//! Uniform random permutation (Fisher-Yates) used when shuffle is on

use crate::types::ShuffleMode;
use dropbeat_core::Track;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle a queue of tracks
///
/// Applies the permutation for the given mode in place. With shuffle on,
/// every ordering is equally likely.
pub fn shuffle_queue<R: Rng + ?Sized>(tracks: &mut [Track], mode: ShuffleMode, rng: &mut R) {
    match mode {
        ShuffleMode::Off => {
            // Canonical order
        }
        ShuffleMode::On => {
            tracks.shuffle(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn create_test_track(id: &str) -> Track {
        Track::new(id, format!("Track {}", id))
    }

    #[test]
    fn shuffle_mode_off_no_change() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tracks = vec![
            create_test_track("1"),
            create_test_track("2"),
            create_test_track("3"),
        ];

        let original = tracks.clone();
        shuffle_queue(&mut tracks, ShuffleMode::Off, &mut rng);

        assert_eq!(original, tracks);
    }

    #[test]
    fn shuffle_preserves_all_tracks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tracks: Vec<Track> = (0..10).map(|i| create_test_track(&i.to_string())).collect();

        shuffle_queue(&mut tracks, ShuffleMode::On, &mut rng);

        let ids: HashSet<String> = tracks.iter().map(|t| t.uid.to_string()).collect();
        assert_eq!(ids.len(), 10);
        for i in 0..10 {
            assert!(ids.contains(&i.to_string()));
        }
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tracks: Vec<Track> = (0..20).map(|i| create_test_track(&i.to_string())).collect();
        let original = tracks.clone();

        shuffle_queue(&mut tracks, ShuffleMode::On, &mut rng);

        // 1/20! chance of identity for a fair shuffle
        assert_ne!(original, tracks);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a: Vec<Track> = (0..16).map(|i| create_test_track(&i.to_string())).collect();
        let mut b = a.clone();

        shuffle_queue(&mut a, ShuffleMode::On, &mut StdRng::seed_from_u64(9));
        shuffle_queue(&mut b, ShuffleMode::On, &mut StdRng::seed_from_u64(9));

        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        // Element 0 should land in each of 4 slots over enough trials
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let mut items: Vec<Track> = (0..4).map(|i| create_test_track(&i.to_string())).collect();
            shuffle_queue(&mut items, ShuffleMode::On, &mut rng);
            let pos = items.iter().position(|t| t.uid.as_str() == "0").unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<Track> = vec![];
        shuffle_queue(&mut empty, ShuffleMode::On, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![create_test_track("1")];
        shuffle_queue(&mut single, ShuffleMode::On, &mut rng);
        assert_eq!(single[0].uid.as_str(), "1");
    }
}
