//! Track domain type

use crate::ids::TrackId;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One playable item
///
/// Equality and hashing look only at `(title, artist)`. Two different
/// tracks sharing both are indistinguishable to every equality check;
/// compare `id` when a stable identity is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Stable synthetic identifier
    #[serde(default = "TrackId::generate")]
    pub id: TrackId,

    /// Track title
    #[serde(alias = "name")]
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork reference (URL or path)
    #[serde(rename = "artwork", alias = "img", default)]
    pub artwork_ref: String,

    /// Media reference handed to the media-playback capability
    #[serde(rename = "media", alias = "audio")]
    pub media_ref: String,
}

/// Borrowed `(title, artist)` identity of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackKey<'a> {
    pub title: &'a str,
    pub artist: &'a str,
}

impl Track {
    /// Create a track with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork_ref: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self::with_id(TrackId::generate(), title, artist, artwork_ref, media_ref)
    }

    /// Create a track with a known id (data sourced with its own identifiers)
    pub fn with_id(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork_ref: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            artwork_ref: artwork_ref.into(),
            media_ref: media_ref.into(),
        }
    }

    /// Identity key used by every equality check
    pub fn key(&self) -> TrackKey<'_> {
        TrackKey {
            title: &self.title,
            artist: &self.artist,
        }
    }

    /// Case-insensitive substring match on title or artist
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
