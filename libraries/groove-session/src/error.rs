//! Error types for session dispatch

use groove_core::CoreError;
use groove_library::LibraryError;
use groove_playback::PlaybackError;
use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    /// No liked song at this display position
    #[error("No liked song at position {position} ({len} liked)")]
    LikedOutOfBounds { position: usize, len: usize },
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
