//! Error types for catalog construction and lookup

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Groove Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// A catalog must hold at least one track
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Track has no media reference to load
    #[error("Track {index} ({title}) has a blank media reference")]
    BlankMediaRef { index: usize, title: String },

    /// Catalog index out of range
    #[error("Track index {index} out of bounds (catalog has {len} tracks)")]
    TrackIndexOutOfBounds { index: usize, len: usize },

    /// Track has no entry in the catalog
    #[error("Track not in catalog: {0}")]
    TrackNotFound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a track not found error
    pub fn track_not_found(title: &str, artist: &str) -> Self {
        Self::TrackNotFound(format!("{title} - {artist}"))
    }
}
