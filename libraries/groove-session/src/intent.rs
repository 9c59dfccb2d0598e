//! User gestures and media notifications expressed as data

use groove_core::PlaylistId;
use groove_playback::RepeatMode;
use serde::{Deserialize, Serialize};

/// Everything a presenter can ask the session to do
///
/// Track positions are catalog indices unless the variant says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    // Transport
    TogglePlayPause,
    Play,
    Pause,
    /// Make a track current without changing play state
    SelectTrack { index: usize },
    /// Make a track current and start it
    PlayTrack { index: usize },
    Previous,
    Next,

    // Modes
    ToggleShuffle,
    SetShuffle { enabled: bool },
    CycleRepeatMode,
    SetRepeatMode { mode: RepeatMode },

    // Seek
    /// Seek to a fraction of the current track
    SeekTo { fraction: f64 },
    SeekBy { seconds: f64 },
    SeekForward,
    SeekBackward,

    // Volume
    SetVolume { volume: f32 },
    StepVolume { delta: f32 },
    VolumeUp,
    VolumeDown,
    ToggleMute,

    // Media element notifications
    TimeUpdate,
    TrackEnded,

    // Liked songs
    ToggleLike { index: usize },
    ToggleLikeCurrent,
    /// Remove the liked song at a display position
    Unlike { position: usize },
    /// Play the liked song at a display position
    PlayLiked { position: usize },

    // Search
    Search { query: String },

    // Playlists
    CreatePlaylist { name: String, description: String },
    AddTrackToPlaylist { playlist: PlaylistId, track_index: usize },
    AddCurrentToPlaylist { playlist: PlaylistId },
    RemoveFromPlaylist { playlist: PlaylistId, position: usize },
    PlayPlaylistEntry { playlist: PlaylistId, position: usize },
}

impl Intent {
    /// Intents raised by the media element rather than the user
    pub fn is_media_notification(&self) -> bool {
        matches!(self, Intent::TimeUpdate | Intent::TrackEnded)
    }
}
