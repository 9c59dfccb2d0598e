//! Media-playback capability
//!
//! Abstracts the host's audio element (an `HTMLAudioElement` in a browser,
//! a simulated element in tests and the terminal front end).

use crate::error::{PlaybackError, Result};
use std::collections::HashMap;

/// Host media-playback capability
///
/// The controller drives it with commands. Its two notifications,
/// time-advanced and playback-ended, are delivered back by calling
/// `PlaybackController::on_time_update` and
/// `PlaybackController::on_track_ended`.
pub trait MediaElement {
    /// Point the element at a new media reference
    fn load(&mut self, media_ref: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position
    fn set_current_time(&mut self, seconds: f64);

    /// Duration of the loaded media, `None` until known
    fn duration(&self) -> Option<f64>;

    /// Output volume in [0, 1]
    fn volume(&self) -> f32;

    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f32);
}

/// Simulated media element
///
/// Keeps a playback clock that only moves when `advance` is called.
/// Durations are looked up per media reference, falling back to a default.
#[derive(Debug, Clone)]
pub struct HeadlessMedia {
    source: Option<String>,
    playing: bool,
    position: f64,
    duration: Option<f64>,
    volume: f32,
    durations: HashMap<String, f64>,
    default_duration: Option<f64>,
    play_commands: usize,
    load_commands: usize,
}

impl HeadlessMedia {
    /// Create an element with no known durations
    pub fn new() -> Self {
        Self {
            source: None,
            playing: false,
            position: 0.0,
            duration: None,
            volume: 1.0,
            durations: HashMap::new(),
            default_duration: None,
            play_commands: 0,
            load_commands: 0,
        }
    }

    /// Create an element reporting the same duration for every source
    pub fn with_default_duration(seconds: f64) -> Self {
        Self {
            default_duration: Some(seconds),
            ..Self::new()
        }
    }

    /// Register the duration of one media reference
    pub fn set_duration_for(&mut self, media_ref: impl Into<String>, seconds: f64) {
        self.durations.insert(media_ref.into(), seconds);
    }

    /// Currently loaded media reference
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether the simulated clock is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of play commands received
    pub fn play_commands(&self) -> usize {
        self.play_commands
    }

    /// Number of load commands received
    pub fn load_commands(&self) -> usize {
        self.load_commands
    }

    /// Advance the clock by `seconds` of playback
    ///
    /// Returns `true` when this step reached the end of the media. The
    /// element stops at the end, as a browser audio element does.
    pub fn advance(&mut self, seconds: f64) -> bool {
        if !self.playing || seconds <= 0.0 {
            return false;
        }

        self.position += seconds;
        match self.duration {
            Some(duration) if self.position >= duration => {
                self.position = duration;
                self.playing = false;
                true
            }
            _ => false,
        }
    }
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for HeadlessMedia {
    fn load(&mut self, media_ref: &str) -> Result<()> {
        if media_ref.is_empty() {
            return Err(PlaybackError::media("empty media reference"));
        }

        self.load_commands += 1;
        self.duration = self
            .durations
            .get(media_ref)
            .copied()
            .or(self.default_duration);
        self.source = Some(media_ref.to_string());
        self.position = 0.0;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::media("no media loaded"));
        }
        self.play_commands += 1;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        let seconds = seconds.max(0.0);
        self.position = match self.duration {
            Some(duration) => seconds.min(duration),
            None => seconds,
        };
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
