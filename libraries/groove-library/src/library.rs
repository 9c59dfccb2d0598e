//! The user's library: liked songs and playlists

use crate::{
    error::{LibraryError, Result},
    liked::LikedSongs,
    playlist::{AddOutcome, Playlist},
};
use groove_core::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Liked songs plus an append-only list of playlists
///
/// Playlists are never removed; their order is creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    liked: LikedSongs,
    playlists: Vec<Playlist>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Liked Songs =====

    /// Like the track if absent, otherwise unlike it; returns new membership
    pub fn toggle_like(&mut self, track: &Track) -> bool {
        let liked = self.liked.toggle(track);
        tracing::info!(title = %track.title, artist = %track.artist, liked, "Like toggled");
        liked
    }

    /// Remove a track from liked songs, returning whether it was liked
    pub fn unlike(&mut self, track: &Track) -> bool {
        let removed = self.liked.unlike(track);
        if removed {
            tracing::info!(title = %track.title, artist = %track.artist, "Unliked");
        }
        removed
    }

    pub fn is_liked(&self, track: &Track) -> bool {
        self.liked.is_liked(track)
    }

    pub fn liked(&self) -> &LikedSongs {
        &self.liked
    }

    // ===== Playlists =====

    /// Create an empty playlist
    ///
    /// A blank name leaves the library unchanged and returns `None`.
    pub fn create_playlist(&mut self, name: &str, description: &str) -> Option<PlaylistId> {
        let Some(playlist) = Playlist::new(name, description) else {
            tracing::warn!("Rejected playlist with blank name");
            return None;
        };

        let id = playlist.id().clone();
        tracing::info!(%id, name = playlist.name(), "Playlist created");
        self.playlists.push(playlist);
        Some(id)
    }

    /// Playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, id: &PlaylistId) -> Result<&Playlist> {
        self.playlists
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.clone()))
    }

    fn playlist_mut(&mut self, id: &PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.clone()))
    }

    /// Append a song unless an equal one is already in the playlist
    pub fn add_song_to_playlist(&mut self, id: &PlaylistId, track: &Track) -> Result<AddOutcome> {
        let playlist = self.playlist_mut(id)?;
        let outcome = playlist.add_song(track);
        tracing::info!(
            playlist = playlist.name(),
            title = %track.title,
            ?outcome,
            "Add song to playlist"
        );
        Ok(outcome)
    }

    /// Remove the song at `position` from a playlist
    pub fn remove_song_from_playlist(&mut self, id: &PlaylistId, position: usize) -> Result<Track> {
        let playlist = self.playlist_mut(id)?;
        let removed = playlist.remove_song(position)?;
        tracing::info!(
            playlist = playlist.name(),
            title = %removed.title,
            position,
            "Removed song from playlist"
        );
        Ok(removed)
    }

    pub fn has_playlists(&self) -> bool {
        !self.playlists.is_empty()
    }
}
