//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop after the last catalog track
    #[default]
    Off,

    /// Wrap from the last track back to the first
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the `Off -> All -> One -> Off` cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Volume indicator shown next to the volume bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeLevel {
    /// Effective volume is zero
    Muted,

    /// Below half
    Low,

    /// Half or above
    High,
}

impl VolumeLevel {
    /// Indicator for an effective volume in [0, 1]
    pub fn from_volume(volume: f32) -> Self {
        if volume <= 0.0 {
            VolumeLevel::Muted
        } else if volume < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }
}

/// Immutable copy of every playback field, handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Catalog index of the current track
    pub current_index: usize,

    /// Whether playback is running
    pub is_playing: bool,

    /// Whether `next` draws a random track
    pub shuffle_enabled: bool,

    /// Behaviour on track completion
    pub repeat_mode: RepeatMode,

    /// Effective volume (0.0 while muted)
    pub volume: f32,

    /// Mute flag
    pub is_muted: bool,

    /// Volume captured when mute was switched on
    pub volume_before_mute: f32,

    /// Playhead in seconds
    pub playhead_seconds: f64,

    /// Current track duration, once the media capability reports it
    pub duration_seconds: Option<f64>,
}

impl PlaybackSnapshot {
    /// Playhead as a fraction of the duration, if known
    pub fn progress(&self) -> Option<f64> {
        match self.duration_seconds {
            Some(duration) if duration > 0.0 => {
                Some((self.playhead_seconds / duration).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }

    /// Volume indicator
    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_volume(self.volume)
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Keyboard seek step in seconds (default: 5)
    pub seek_step_secs: f64,

    /// Keyboard volume step (default: 0.1)
    pub volume_step: f32,

    /// Fixed seed for the shuffle RNG (default: none, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
            seek_step_secs: 5.0,
            volume_step: 0.1,
            shuffle_seed: None,
        }
    }
}
