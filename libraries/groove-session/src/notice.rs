//! Blocking notifications shown to the user

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message a presenter must surface before continuing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// Add-to-playlist requested before any playlist exists
    NoPlaylists,

    /// Song is already in the chosen playlist
    AlreadyInPlaylist,

    /// Song appended to a playlist
    AddedToPlaylist { title: String, playlist: String },

    /// Playlist created
    PlaylistCreated { name: String },

    /// Create-playlist submitted with a blank name
    PlaylistNameRequired,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoPlaylists => write!(f, "No playlists created yet. Create one first!"),
            Notice::AlreadyInPlaylist => write!(f, "Song already in this playlist!"),
            Notice::AddedToPlaylist { title, playlist } => {
                write!(f, "Added \"{title}\" to \"{playlist}\"!")
            }
            Notice::PlaylistCreated { name } => write!(f, "Playlist \"{name}\" created!"),
            Notice::PlaylistNameRequired => write!(f, "Playlist name cannot be empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Notice::NoPlaylists.to_string(),
            "No playlists created yet. Create one first!"
        );
        assert_eq!(
            Notice::AddedToPlaylist {
                title: "Rock Anthem".into(),
                playlist: "Gym".into(),
            }
            .to_string(),
            r#"Added "Rock Anthem" to "Gym"!"#
        );
    }
}
