//! Liked songs

use groove_core::Track;
use serde::{Deserialize, Serialize};

/// Set of liked tracks, deduplicated by `(title, artist)`
///
/// Membership is unordered; iteration follows insertion order for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikedSongs {
    tracks: Vec<Track>,
}

impl LikedSongs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the track if absent, otherwise remove it
    ///
    /// Returns the new membership state.
    pub fn toggle(&mut self, track: &Track) -> bool {
        if self.unlike(track) {
            false
        } else {
            self.tracks.push(track.clone());
            true
        }
    }

    /// Remove a track, returning whether it was liked
    pub fn unlike(&mut self, track: &Track) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t != track);
        self.tracks.len() != before
    }

    pub fn is_liked(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    /// Liked track at a display position
    pub fn get(&self, position: usize) -> Option<&Track> {
        self.tracks.get(position)
    }

    /// Liked tracks in insertion order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, artist: &str) -> Track {
        Track::new(title, artist, "", format!("{title}.mp3"))
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut liked = LikedSongs::new();
        let song = track("Rock Anthem", "Arctic Monkeys");

        assert!(liked.toggle(&song));
        assert!(liked.is_liked(&song));
        assert_eq!(liked.len(), 1);

        assert!(!liked.toggle(&song));
        assert!(!liked.is_liked(&song));
        assert!(liked.is_empty());
    }

    #[test]
    fn same_title_and_artist_counts_as_liked() {
        let mut liked = LikedSongs::new();
        liked.toggle(&track("Intro", "Drake"));

        // Different id and media, same identity
        let copy = Track::new("Intro", "Drake", "other.jpg", "other.mp3");
        assert!(liked.is_liked(&copy));
        assert!(!liked.toggle(&copy));
        assert!(liked.is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut liked = LikedSongs::new();
        liked.toggle(&track("C", "x"));
        liked.toggle(&track("A", "x"));
        liked.toggle(&track("B", "x"));
        liked.unlike(&track("A", "x"));

        let titles: Vec<&str> = liked.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["C", "B"]);
    }

    #[test]
    fn unlike_missing_track_is_noop() {
        let mut liked = LikedSongs::new();
        liked.toggle(&track("A", "x"));
        assert!(!liked.unlike(&track("Z", "x")));
        assert_eq!(liked.len(), 1);
    }
}
