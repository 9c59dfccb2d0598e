//! Groove Player Core
//!
//! Platform-agnostic domain types shared by every Groove crate.
//!
//! This crate defines:
//! - **Track**: one playable item, with (title, artist) equality
//! - **Catalog**: the fixed, non-empty, index-addressable list of tracks
//! - **Ids**: stable synthetic identifiers for tracks and playlists
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use groove_core::{Catalog, Track};
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Midnight Drive", "Drake", "art/2.jpg", "audio/2.mp3"),
//!     Track::new("Rock Anthem", "Arctic Monkeys", "art/4.jpg", "audio/4.mp3"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(1).unwrap().artist, "Arctic Monkeys");
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod track;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use ids::{PlaylistId, TrackId};
pub use track::{Track, TrackKey};
