//! Playback controller - core state machine
//!
//! Owns the catalog, the playback fields and the media element. Every
//! user gesture and media notification maps to one method that applies
//! its whole state change before returning.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    media::MediaElement,
    queue,
    types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, VolumeLevel},
    volume::Volume,
};
use groove_core::{Catalog, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Central playback state machine
///
/// Orchestrates:
/// - Current catalog index and play/pause
/// - Shuffle flag (consulted by `next` only)
/// - Repeat modes (Off, All, One) on track completion
/// - Volume and mute snapshot
/// - Playhead and duration as reported by the media element
pub struct PlaybackController<M: MediaElement> {
    // State
    catalog: Catalog,
    current_index: usize,
    is_playing: bool,
    playhead: f64,
    duration: Option<f64>,

    // Settings
    volume: Volume,
    shuffle: bool,
    repeat: RepeatMode,
    seek_step: f64,
    volume_step: f32,

    // Collaborators
    media: M,
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<M: MediaElement> PlaybackController<M> {
    /// Create a controller positioned on the first catalog track
    ///
    /// Loads track 0 into the media element and applies the configured
    /// volume. Nothing plays until `play` is called.
    pub fn new(catalog: Catalog, media: M, config: PlaybackConfig) -> Result<Self> {
        let rng = config
            .shuffle_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        let mut controller = Self {
            catalog,
            current_index: 0,
            is_playing: false,
            playhead: 0.0,
            duration: None,
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            seek_step: config.seek_step_secs,
            volume_step: config.volume_step,
            media,
            rng,
            pending_events: Vec::new(),
        };

        controller.load_track(0)?;
        let level = controller.volume.level();
        controller.media.set_volume(level);

        tracing::debug!(
            tracks = controller.catalog.len(),
            volume = level,
            "Playback controller ready"
        );
        Ok(controller)
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// Re-issues the play command even when already playing.
    pub fn play(&mut self) -> Result<()> {
        self.media.play()?;
        self.set_playing(true);
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.media.pause();
        self.set_playing(false);
    }

    /// Pause when playing, play otherwise
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Make a catalog track current
    ///
    /// Loads its media reference and, when playback is running, starts the
    /// new track immediately.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if index >= self.catalog.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: self.catalog.len(),
            });
        }

        let previous_index = self.current_index;
        self.load_track(index)?;

        let track_id = self.current_track().id.clone();
        tracing::debug!(index, %track_id, "Track selected");
        self.pending_events.push(PlaybackEvent::TrackChanged {
            index,
            track_id,
            previous_index,
        });

        if self.is_playing {
            self.media.play()?;
        }
        Ok(())
    }

    /// Skip to the next track
    ///
    /// Random (never the current track) when shuffle is on, otherwise the
    /// following catalog index with wrap-around.
    pub fn next(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        let index = queue::next_index(&snapshot, self.catalog.len(), &mut self.rng);
        self.select_track(index)
    }

    /// Go to the previous catalog track, wrapping to the last
    ///
    /// Shuffle is not consulted.
    pub fn previous(&mut self) -> Result<()> {
        let index = queue::previous_index(self.current_index, self.catalog.len());
        self.select_track(index)
    }

    // ===== Media Notifications =====

    /// Current track finished playing
    pub fn on_track_ended(&mut self) -> Result<()> {
        let index = self.current_index;
        self.pending_events.push(PlaybackEvent::TrackEnded { index });

        if self.repeat == RepeatMode::One {
            tracing::debug!(index, "Repeating track");
            self.media.set_current_time(0.0);
            self.playhead = 0.0;
            return self.play();
        }

        if self.repeat == RepeatMode::All || index < self.catalog.last_index() {
            return self.next();
        }

        tracing::debug!(index, "Reached end of catalog");
        self.pause();
        self.media.set_current_time(0.0);
        self.playhead = 0.0;
        Ok(())
    }

    /// Media element advanced its playhead
    ///
    /// Reads position and duration from the element.
    pub fn on_time_update(&mut self) {
        self.duration = valid_duration(self.media.duration());

        let position = self.media.current_time().max(0.0);
        self.playhead = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };

        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position_secs: self.playhead,
            duration_secs: self.duration,
        });
    }

    // ===== Seek =====

    /// Seek to a fraction of the current track
    ///
    /// Returns `false` without seeking when the duration is not known yet.
    pub fn seek_to(&mut self, fraction: f64) -> bool {
        let Some(duration) = self.known_duration() else {
            return false;
        };
        if fraction.is_nan() {
            tracing::warn!("Ignoring NaN seek fraction");
            return false;
        }

        let position = fraction.clamp(0.0, 1.0) * duration;
        self.seek_absolute(position);
        true
    }

    /// Seek relative to the current playhead
    ///
    /// Clamps to the start of the track and, once known, to its duration.
    pub fn seek_by(&mut self, delta_seconds: f64) {
        let mut position = (self.media.current_time() + delta_seconds).max(0.0);
        if let Some(duration) = self.known_duration() {
            position = position.min(duration);
        }
        self.seek_absolute(position);
    }

    /// Seek forward by the configured keyboard step
    pub fn seek_forward(&mut self) {
        self.seek_by(self.seek_step);
    }

    /// Seek backward by the configured keyboard step
    pub fn seek_backward(&mut self) {
        self.seek_by(-self.seek_step);
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0)
    ///
    /// Does not touch the mute flag.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume.set_level(volume);
        self.apply_volume();
    }

    /// Change volume by `delta`
    pub fn step_volume(&mut self, delta: f32) {
        self.set_volume(self.volume.level() + delta);
    }

    /// Raise volume by the configured keyboard step
    pub fn volume_up(&mut self) {
        self.step_volume(self.volume_step);
    }

    /// Lower volume by the configured keyboard step
    pub fn volume_down(&mut self) {
        self.step_volume(-self.volume_step);
    }

    /// Toggle mute, returning the new flag
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.volume.toggle_mute();
        self.apply_volume();
        muted
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle, returning the new flag
    pub fn toggle_shuffle(&mut self) -> bool {
        self.set_shuffle(!self.shuffle);
        self.shuffle
    }

    /// Set shuffle flag
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;
        self.pending_events
            .push(PlaybackEvent::ShuffleChanged { enabled });
    }

    /// Advance `Off -> All -> One -> Off`, returning the new mode
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.set_repeat_mode(self.repeat.cycled());
        self.repeat
    }

    /// Set repeat mode
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        if self.repeat == mode {
            return;
        }
        self.repeat = mode;
        self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
    }

    // ===== State Queries =====

    /// Copy of every playback field
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_index: self.current_index,
            is_playing: self.is_playing,
            shuffle_enabled: self.shuffle,
            repeat_mode: self.repeat,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            volume_before_mute: self.volume.level_before_mute(),
            playhead_seconds: self.playhead,
            duration_seconds: self.duration,
        }
    }

    /// The catalog being played
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog index of the current track
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current track
    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.current_index]
    }

    /// Tracks after the current one, in catalog order
    pub fn upcoming(&self) -> &[Track] {
        queue::upcoming(&self.catalog, self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Effective volume (0.0 while muted)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn volume_before_mute(&self) -> f32 {
        self.volume.level_before_mute()
    }

    /// Volume indicator
    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_volume(self.volume.level())
    }

    pub fn playhead_seconds(&self) -> f64 {
        self.playhead
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration
    }

    /// Playhead as a fraction of the duration, if known
    pub fn progress(&self) -> Option<f64> {
        self.snapshot().progress()
    }

    /// The media element
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Mutable access to the media element (for simulated clocks)
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    // ===== Event Handling =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Load a track into the media element, then make it current
    ///
    /// A rejected load leaves the current index untouched.
    fn load_track(&mut self, index: usize) -> Result<()> {
        let media_ref = self.catalog.tracks()[index].media_ref.clone();
        self.media.load(&media_ref)?;
        self.current_index = index;
        self.playhead = 0.0;
        self.duration = valid_duration(self.media.duration());
        Ok(())
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            tracing::debug!(playing, index = self.current_index, "Playback state changed");
            self.pending_events
                .push(PlaybackEvent::StateChanged { is_playing: playing });
        }
    }

    fn apply_volume(&mut self) {
        let volume = self.volume.level();
        self.media.set_volume(volume);
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            volume,
            is_muted: self.volume.is_muted(),
        });
    }

    fn known_duration(&mut self) -> Option<f64> {
        if self.duration.is_none() {
            self.duration = valid_duration(self.media.duration());
        }
        self.duration
    }

    fn seek_absolute(&mut self, position: f64) {
        self.media.set_current_time(position);
        self.playhead = position;
        self.pending_events.push(PlaybackEvent::Seeked {
            position_secs: position,
        });
    }
}

/// Browsers report NaN before metadata loads and Infinity for streams
fn valid_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}
