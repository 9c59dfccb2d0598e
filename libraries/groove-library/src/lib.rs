//! Groove Player - Library
//!
//! The user's collection: liked songs, playlists, and catalog search.
//!
//! Every membership check uses `Track` equality, which compares
//! `(title, artist)` only. Duplicates are never errors; adding an equal
//! song twice reports `AddOutcome::AlreadyPresent` and changes nothing.
//!
//! # Example
//!
//! ```rust
//! use groove_core::Catalog;
//! use groove_library::{filter_catalog, AddOutcome, Library};
//!
//! let catalog = Catalog::sample();
//! let mut library = Library::new();
//!
//! let road_trip = library.create_playlist("Road Trip", "").unwrap();
//! let song = catalog.get(0).unwrap();
//! assert_eq!(
//!     library.add_song_to_playlist(&road_trip, song).unwrap(),
//!     AddOutcome::Added
//! );
//!
//! assert!(library.toggle_like(song));
//!
//! let result = filter_catalog("drake", &catalog);
//! assert_eq!(result.hits()[0].index, 1);
//! ```

mod error;
mod library;
pub mod liked;
pub mod playlist;
pub mod search;

pub use error::{LibraryError, Result};
pub use library::Library;
pub use liked::LikedSongs;
pub use playlist::{AddOutcome, Playlist};
pub use search::{filter_catalog, SearchHit, SearchResult};
