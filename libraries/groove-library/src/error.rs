//! Error types for library mutations

use groove_core::PlaylistId;
use thiserror::Error;

/// Library errors
#[derive(Debug, Error)]
pub enum LibraryError {
    /// No playlist with this id
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Song position out of range
    #[error("Position {position} out of bounds (playlist has {len} songs)")]
    PositionOutOfBounds { position: usize, len: usize },
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
