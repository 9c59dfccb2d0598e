//! User-created playlists

use crate::error::{LibraryError, Result};
use groove_core::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Result of adding a song to a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    /// Song appended
    Added,

    /// An equal song is already in the playlist; nothing changed
    AlreadyPresent,
}

/// Named, ordered list of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    id: PlaylistId,
    name: String,
    description: Option<String>,
    songs: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    ///
    /// Returns `None` when the name is empty or whitespace-only. Name and
    /// description are trimmed; a blank description is dropped.
    pub fn new(name: &str, description: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let description = description.trim();
        Some(Self {
            id: PlaylistId::generate(),
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            songs: Vec::new(),
        })
    }

    pub fn id(&self) -> &PlaylistId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Songs in playlist order
    pub fn songs(&self) -> &[Track] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Whether an equal `(title, artist)` song is present
    pub fn contains(&self, track: &Track) -> bool {
        self.songs.contains(track)
    }

    /// Append a song unless an equal one is already present
    pub fn add_song(&mut self, track: &Track) -> AddOutcome {
        if self.contains(track) {
            return AddOutcome::AlreadyPresent;
        }
        self.songs.push(track.clone());
        AddOutcome::Added
    }

    /// Remove the song at `position`
    pub fn remove_song(&mut self, position: usize) -> Result<Track> {
        if position >= self.songs.len() {
            return Err(LibraryError::PositionOutOfBounds {
                position,
                len: self.songs.len(),
            });
        }
        Ok(self.songs.remove(position))
    }
}
