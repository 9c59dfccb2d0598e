//! Playback Events
//!
//! Event-based communication for UI synchronization. Every controller
//! transition pushes an event; adapters drain them after each gesture
//! or media notification.

use crate::types::RepeatMode;
use groove_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing/paused flag changed
    StateChanged {
        /// New playing flag
        is_playing: bool,
    },

    /// A different catalog track was loaded
    TrackChanged {
        /// Catalog index of the new track
        index: usize,
        /// Id of the new track
        track_id: TrackId,
        /// Catalog index of the track that was current before
        previous_index: usize,
    },

    /// Shuffle flag changed
    ShuffleChanged {
        /// New shuffle flag
        enabled: bool,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// New repeat mode
        mode: RepeatMode,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Effective volume
        volume: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Playhead moved by playback
    PositionUpdate {
        /// Current playhead
        position_secs: f64,
        /// Track duration, if known
        duration_secs: Option<f64>,
    },

    /// Playhead moved by a seek
    Seeked {
        /// New playhead
        position_secs: f64,
    },

    /// Current track reached its end
    TrackEnded {
        /// Catalog index of the finished track
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_variant_tag() {
        let event = PlaybackEvent::RepeatChanged {
            mode: RepeatMode::All,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"RepeatChanged":{"mode":"all"}}"#);

        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
