//! The fixed list of available tracks

use crate::error::{CoreError, Result};
use crate::ids::TrackId;
use crate::track::Track;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered, non-empty, read-only sequence of tracks
///
/// The index into the catalog is the canonical reference for the current
/// track. The catalog never changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Track>", into = "Vec<Track>")]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty track list
    ///
    /// Every track needs a non-blank media reference.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        if let Some(index) = tracks.iter().position(|t| t.media_ref.trim().is_empty()) {
            return Err(CoreError::BlankMediaRef {
                index,
                title: tracks[index].title.clone(),
            });
        }
        Ok(Self { tracks })
    }

    /// Parse a catalog from a JSON array of tracks
    pub fn from_json(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} tracks from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Built-in six-track catalog of freely available sample audio
    pub fn sample() -> Self {
        const ARTWORK: [&str; 6] = [
            "photo-1470225620780-dba8ba36b745",
            "photo-1493225457124-a3eb161ffa5f",
            "photo-1511379938547-c1f69419868d",
            "photo-1487180144351-b8472da7d491",
            "photo-1514525253161-7a46d19cd819",
            "photo-1459749411175-04bf5292ceea",
        ];
        const SONGS: [(&str, &str, &str); 6] = [
            ("summer-vibes", "Summer Vibes", "The Weeknd"),
            ("midnight-drive", "Midnight Drive", "Drake"),
            ("electric-dreams", "Electric Dreams", "Ed Sheeran"),
            ("rock-anthem", "Rock Anthem", "Arctic Monkeys"),
            ("chill-beats", "Chill Beats", "Billie Eilish"),
            ("latin-rhythm", "Latin Rhythm", "Bad Bunny"),
        ];

        let tracks = SONGS
            .iter()
            .zip(ARTWORK)
            .enumerate()
            .map(|(i, ((id, title, artist), artwork))| {
                Track::with_id(
                    TrackId::new(*id),
                    *title,
                    *artist,
                    format!("https://images.unsplash.com/{artwork}?w=300&h=300&fit=crop"),
                    format!(
                        "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{}.mp3",
                        i + 1
                    ),
                )
            })
            .collect();

        Self { tracks }
    }

    /// Number of tracks (always at least one)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; a catalog cannot be empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Index of the last track
    pub fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Get track at index, failing when out of range
    pub fn track(&self, index: usize) -> Result<&Track> {
        self.tracks
            .get(index)
            .ok_or(CoreError::TrackIndexOutOfBounds {
                index,
                len: self.tracks.len(),
            })
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Catalog index of a track id
    pub fn position_of_id(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Resolve a track to its catalog index
    ///
    /// Tries the stable id first and falls back to `(title, artist)`
    /// equality for tracks whose id is unknown to this catalog.
    pub fn position_of(&self, track: &Track) -> Option<usize> {
        self.position_of_id(&track.id)
            .or_else(|| self.tracks.iter().position(|t| t == track))
    }
}

impl TryFrom<Vec<Track>> for Catalog {
    type Error = CoreError;

    fn try_from(tracks: Vec<Track>) -> Result<Self> {
        Self::new(tracks)
    }
}

impl From<Catalog> for Vec<Track> {
    fn from(catalog: Catalog) -> Self {
        catalog.tracks
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
