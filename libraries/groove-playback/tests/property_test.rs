//! Property-based tests for the playback controller
//!
//! Uses proptest to verify invariants across many random inputs.

use groove_core::{Catalog, Track};
use groove_playback::{HeadlessMedia, PlaybackConfig, PlaybackController, RepeatMode};
use proptest::prelude::*;

// ===== Helpers =====

fn catalog_of(len: usize) -> Catalog {
    let tracks = (0..len)
        .map(|i| {
            Track::new(
                format!("Song {i}"),
                format!("Artist {}", i % 3),
                format!("art/{i}.jpg"),
                format!("audio/{i}.mp3"),
            )
        })
        .collect();
    Catalog::new(tracks).unwrap()
}

fn controller(len: usize, seed: u64) -> PlaybackController<HeadlessMedia> {
    let config = PlaybackConfig {
        shuffle_seed: Some(seed),
        ..PlaybackConfig::default()
    };
    PlaybackController::new(
        catalog_of(len),
        HeadlessMedia::with_default_duration(120.0),
        config,
    )
    .unwrap()
}

// ===== Property Tests =====

proptest! {
    /// Property: shuffled next never stays on the current track
    #[test]
    fn shuffle_next_always_moves(len in 2usize..40, seed in any::<u64>(), steps in 1usize..60) {
        let mut c = controller(len, seed);
        c.set_shuffle(true);

        for _ in 0..steps {
            let before = c.current_index();
            c.next().unwrap();
            prop_assert_ne!(c.current_index(), before);
            prop_assert!(c.current_index() < len);
        }
    }

    /// Property: linear previous then next returns to the start
    #[test]
    fn previous_then_next_is_identity(len in 1usize..40, start in 0usize..40) {
        let start = start % len;
        let mut c = controller(len, 0);
        c.select_track(start).unwrap();

        c.previous().unwrap();
        c.next().unwrap();
        prop_assert_eq!(c.current_index(), start);
    }

    /// Property: current index stays in bounds under any operation sequence
    #[test]
    fn index_always_in_bounds(
        len in 1usize..20,
        seed in any::<u64>(),
        operations in prop::collection::vec(0u8..8, 1..80)
    ) {
        let mut c = controller(len, seed);

        for op in operations {
            match op {
                0 => c.next().unwrap(),
                1 => c.previous().unwrap(),
                2 => { c.toggle_shuffle(); }
                3 => { c.cycle_repeat_mode(); }
                4 => c.toggle_play_pause().unwrap(),
                5 => {
                    c.media_mut().advance(500.0);
                    c.on_time_update();
                    c.on_track_ended().unwrap();
                }
                6 => { c.seek_to(0.5); }
                _ => c.select_track(len - 1).unwrap(),
            }
            prop_assert!(c.current_index() < len);
            prop_assert!(c.playhead_seconds() >= 0.0);
            prop_assert!(c.playhead_seconds() <= 120.0);
        }
    }

    /// Property: muting twice restores the exact volume
    #[test]
    fn mute_round_trip_restores_volume(volume in 0.0f32..=1.0) {
        let mut c = controller(3, 0);
        c.set_volume(volume);

        c.toggle_mute();
        prop_assert_eq!(c.volume(), 0.0);
        c.toggle_mute();
        prop_assert_eq!(c.volume(), volume);
        prop_assert!(!c.is_muted());
    }

    /// Property: volume is always clamped into [0, 1]
    #[test]
    fn volume_always_clamped(volume in -10.0f32..10.0, steps in prop::collection::vec(-1.0f32..1.0, 0..20)) {
        let mut c = controller(3, 0);
        c.set_volume(volume);
        for delta in steps {
            c.step_volume(delta);
            prop_assert!((0.0..=1.0).contains(&c.volume()));
        }
    }

    /// Property: repeat one never leaves the track
    #[test]
    fn repeat_one_pins_index(len in 1usize..20, start in 0usize..20, ends in 1usize..10) {
        let start = start % len;
        let mut c = controller(len, 0);
        c.set_repeat_mode(RepeatMode::One);
        c.select_track(start).unwrap();
        c.play().unwrap();

        for _ in 0..ends {
            c.media_mut().advance(200.0);
            c.on_track_ended().unwrap();
            prop_assert_eq!(c.current_index(), start);
            prop_assert_eq!(c.playhead_seconds(), 0.0);
            prop_assert!(c.is_playing());
        }
    }

    /// Property: seek fraction maps linearly onto the duration
    #[test]
    fn seek_fraction_is_proportional(fraction in 0.0f64..=1.0) {
        let mut c = controller(2, 0);
        prop_assert!(c.seek_to(fraction));
        prop_assert!((c.playhead_seconds() - fraction * 120.0).abs() < 1e-9);
    }
}
