//! Playback controller integration tests
//!
//! Real-world listening sessions driven through the public API, with the
//! simulated media element standing in for the browser's audio element.

use groove_core::Catalog;
use groove_playback::{
    format_time, HeadlessMedia, MediaElement, PlaybackConfig, PlaybackController, PlaybackEvent,
    RepeatMode,
};

// ===== Test Helpers =====

fn controller_with(config: PlaybackConfig) -> PlaybackController<HeadlessMedia> {
    let mut media = HeadlessMedia::with_default_duration(180.0);
    media.set_duration_for(
        "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        60.0,
    );
    PlaybackController::new(Catalog::sample(), media, config).unwrap()
}

fn controller() -> PlaybackController<HeadlessMedia> {
    controller_with(PlaybackConfig {
        shuffle_seed: Some(5),
        ..PlaybackConfig::default()
    })
}

/// Tick the simulated clock and forward the element's notifications
fn tick(c: &mut PlaybackController<HeadlessMedia>, seconds: f64) {
    let ended = c.media_mut().advance(seconds);
    c.on_time_update();
    if ended {
        c.on_track_ended().unwrap();
    }
}

// ===== Listening Sessions =====

#[test]
fn listen_through_whole_catalog_then_stop() {
    let mut c = controller();
    c.play().unwrap();

    for expected in 1..6 {
        tick(&mut c, 500.0);
        assert_eq!(c.current_index(), expected);
        assert!(c.is_playing());
    }

    // Last track finishes with repeat off
    tick(&mut c, 500.0);
    assert_eq!(c.current_index(), 5);
    assert!(!c.is_playing());
    assert_eq!(c.playhead_seconds(), 0.0);
}

#[test]
fn repeat_all_loops_back_to_first_track() {
    let mut c = controller_with(PlaybackConfig {
        repeat: RepeatMode::All,
        ..PlaybackConfig::default()
    });
    c.select_track(5).unwrap();
    c.play().unwrap();

    tick(&mut c, 500.0);
    assert_eq!(c.current_index(), 0);
    assert!(c.media().is_playing());
}

#[test]
fn duration_is_per_track() {
    let mut c = controller();
    c.play().unwrap();
    c.next().unwrap();

    tick(&mut c, 30.0);
    assert_eq!(c.duration_seconds(), Some(60.0));
    assert_eq!(c.progress(), Some(0.5));
    assert_eq!(format_time(c.playhead_seconds()), "0:30");
}

#[test]
fn switching_tracks_while_paused_stays_paused() {
    let mut c = controller();
    c.play().unwrap();
    c.pause();

    c.next().unwrap();
    c.next().unwrap();
    assert_eq!(c.current_index(), 2);
    assert!(!c.media().is_playing());

    c.toggle_play_pause().unwrap();
    assert!(c.media().is_playing());
    assert!(c.media().source().unwrap().ends_with("Song-3.mp3"));
}

#[test]
fn shuffled_session_visits_random_tracks() {
    let mut c = controller_with(PlaybackConfig {
        shuffle: true,
        repeat: RepeatMode::All,
        shuffle_seed: Some(2024),
        ..PlaybackConfig::default()
    });
    c.play().unwrap();

    for _ in 0..30 {
        let before = c.current_index();
        tick(&mut c, 500.0);
        assert_ne!(c.current_index(), before);
        assert!(c.is_playing());
    }

    // Shuffle does not change the upcoming listing
    let upcoming: Vec<usize> = c
        .upcoming()
        .iter()
        .map(|t| c.catalog().position_of(t).unwrap())
        .collect();
    let expected: Vec<usize> = (c.current_index() + 1..6).collect();
    assert_eq!(upcoming, expected);
}

#[test]
fn same_seed_gives_same_shuffle_order() {
    let run = || {
        let mut c = controller_with(PlaybackConfig {
            shuffle: true,
            shuffle_seed: Some(77),
            ..PlaybackConfig::default()
        });
        (0..10)
            .map(|_| {
                c.next().unwrap();
                c.current_index()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn configured_initial_settings_are_applied() {
    let c = controller_with(PlaybackConfig {
        volume: 0.4,
        shuffle: true,
        repeat: RepeatMode::One,
        ..PlaybackConfig::default()
    });

    let snapshot = c.snapshot();
    assert_eq!(snapshot.volume, 0.4);
    assert_eq!(snapshot.volume_before_mute, 0.4);
    assert!(snapshot.shuffle_enabled);
    assert_eq!(snapshot.repeat_mode, RepeatMode::One);
    assert_eq!(c.media().volume(), 0.4);
}

#[test]
fn events_describe_a_gesture_sequence() {
    let mut c = controller();
    c.drain_events();

    c.play().unwrap();
    c.next().unwrap();
    c.toggle_mute();
    c.pause();

    let events = c.drain_events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], PlaybackEvent::StateChanged { is_playing: true });
    assert!(matches!(
        events[1],
        PlaybackEvent::TrackChanged {
            index: 1,
            previous_index: 0,
            ..
        }
    ));
    assert_eq!(
        events[2],
        PlaybackEvent::VolumeChanged {
            volume: 0.0,
            is_muted: true
        }
    );
    assert_eq!(events[3], PlaybackEvent::StateChanged { is_playing: false });
    assert!(!c.has_pending_events());
}

#[test]
fn end_of_track_event_precedes_transition() {
    let mut c = controller();
    c.play().unwrap();
    c.drain_events();

    tick(&mut c, 500.0);

    let events = c.drain_events();
    let ended = events
        .iter()
        .position(|e| matches!(e, PlaybackEvent::TrackEnded { index: 0 }))
        .unwrap();
    let changed = events
        .iter()
        .position(|e| matches!(e, PlaybackEvent::TrackChanged { index: 1, .. }))
        .unwrap();
    assert!(ended < changed);
}

#[test]
fn shuffle_without_repeat_still_stops_on_last_index() {
    let mut c = controller_with(PlaybackConfig {
        shuffle: true,
        ..PlaybackConfig::default()
    });
    c.select_track(5).unwrap();
    c.play().unwrap();

    tick(&mut c, 500.0);
    assert_eq!(c.current_index(), 5);
    assert!(!c.is_playing());
}
