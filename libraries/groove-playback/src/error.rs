//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Catalog index out of range
    #[error("Track index {index} out of bounds (catalog has {len} tracks)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Media-playback capability rejected a command
    #[error("Media error: {0}")]
    Media(String),

    /// Catalog error
    #[error(transparent)]
    Core(#[from] groove_core::CoreError),
}

impl PlaybackError {
    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
