//! Groove Player - Session
//!
//! Ties the playback controller, the library and search into one
//! `Session`, and defines the boundary any front end sits behind.
//!
//! # Architecture
//!
//! ```text
//! gesture -> Presenter -> Intent -> Session::dispatch -> SessionSnapshot -> Presenter
//! ```
//!
//! Presenters hold no player state. They turn gestures into `Intent`s,
//! show `Notice`s, and redraw from the snapshot that follows every
//! intent. The terminal front end and the browser bindings (`wasm`
//! feature) are both presenters.
//!
//! # Example
//!
//! ```rust
//! use groove_core::Catalog;
//! use groove_playback::{HeadlessMedia, PlaybackConfig};
//! use groove_session::{Intent, Notice, Session};
//!
//! let mut session = Session::new(
//!     Catalog::sample(),
//!     HeadlessMedia::with_default_duration(120.0),
//!     PlaybackConfig::default(),
//! )
//! .unwrap();
//!
//! session.dispatch(Intent::PlayTrack { index: 2 }).unwrap();
//! let notice = session
//!     .dispatch(Intent::CreatePlaylist {
//!         name: "Focus".into(),
//!         description: String::new(),
//!     })
//!     .unwrap();
//! assert_eq!(notice, Some(Notice::PlaylistCreated { name: "Focus".into() }));
//!
//! let snapshot = session.snapshot();
//! assert!(snapshot.playback.is_playing);
//! assert_eq!(snapshot.current_track.title, "Electric Dreams");
//! ```

mod error;
mod intent;
mod notice;
mod presenter;
mod session;
mod shortcuts;
mod snapshot;

// WASM bindings (only compiled with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use error::{Result, SessionError};
pub use intent::Intent;
pub use notice::Notice;
pub use presenter::{run, Presenter};
pub use session::Session;
pub use shortcuts::shortcut_for;
pub use snapshot::{IndexedTrack, SearchView, SessionSnapshot};
