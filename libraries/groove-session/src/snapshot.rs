//! Immutable view of the whole session for rendering

use groove_core::Track;
use groove_library::{Playlist, SearchResult};
use groove_playback::{PlaybackSnapshot, VolumeLevel};
use serde::{Deserialize, Serialize};

/// Track together with its catalog index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedTrack {
    pub index: usize,
    pub track: Track,
}

/// Search panel state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchView {
    NotSearched,
    NoMatches { query: String },
    Matches { query: String, hits: Vec<IndexedTrack> },
}

impl SearchView {
    pub(crate) fn from_result(query: &str, result: &SearchResult<'_>) -> Self {
        match result {
            SearchResult::NotSearched => SearchView::NotSearched,
            SearchResult::NoMatches => SearchView::NoMatches {
                query: query.to_string(),
            },
            SearchResult::Matches(hits) => SearchView::Matches {
                query: query.to_string(),
                hits: hits
                    .iter()
                    .map(|hit| IndexedTrack {
                        index: hit.index,
                        track: hit.track.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Everything a presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub playback: PlaybackSnapshot,
    pub current_track: Track,
    pub current_liked: bool,
    pub volume_level: VolumeLevel,
    /// Tracks after the current one, in catalog order
    pub upcoming: Vec<IndexedTrack>,
    pub liked: Vec<Track>,
    pub playlists: Vec<Playlist>,
    pub search: SearchView,
}

impl SessionSnapshot {
    /// Playhead as a fraction of the duration, once known
    pub fn progress(&self) -> Option<f64> {
        self.playback.progress()
    }
}
