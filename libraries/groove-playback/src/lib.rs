//! Groove Player - Playback Management
//!
//! Platform-agnostic playback state machine for Groove Player.
//!
//! This crate provides:
//! - Play/pause with autoplay when switching tracks
//! - Previous/next navigation with wrap-around
//! - Shuffle (random next, never the current track)
//! - Repeat modes (Off, All, One) applied on track completion
//! - Seek by fraction or by keyboard step
//! - Volume (0.0-1.0) with mute snapshot/restore
//! - Upcoming-track listing
//!
//! # Architecture
//!
//! `groove-playback` knows nothing about rendering or audio decoding:
//! - No DOM or UI toolkit dependency
//! - No audio decoder
//! - All state owned by one `PlaybackController`
//!
//! The host's audio element is reached through the `MediaElement` trait.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use groove_core::Catalog;
//! use groove_playback::{HeadlessMedia, PlaybackConfig, PlaybackController, RepeatMode};
//!
//! let mut controller = PlaybackController::new(
//!     Catalog::sample(),
//!     HeadlessMedia::with_default_duration(180.0),
//!     PlaybackConfig::default(),
//! )
//! .unwrap();
//!
//! controller.play().unwrap();
//! controller.next().unwrap();
//! assert_eq!(controller.current_index(), 1);
//!
//! controller.set_volume(0.8);
//! controller.toggle_mute();
//! assert_eq!(controller.volume(), 0.0);
//!
//! controller.cycle_repeat_mode();
//! assert_eq!(controller.repeat_mode(), RepeatMode::All);
//! ```
//!
//! # Example: Media Notifications
//!
//! ```rust
//! use groove_core::Catalog;
//! use groove_playback::{HeadlessMedia, PlaybackConfig, PlaybackController};
//!
//! let mut controller = PlaybackController::new(
//!     Catalog::sample(),
//!     HeadlessMedia::with_default_duration(30.0),
//!     PlaybackConfig::default(),
//! )
//! .unwrap();
//! controller.play().unwrap();
//!
//! // Platform clock ticks; forward the element's events to the controller
//! if controller.media_mut().advance(31.0) {
//!     controller.on_time_update();
//!     controller.on_track_ended().unwrap();
//! }
//! assert_eq!(controller.current_index(), 1);
//! ```

mod controller;
mod error;
pub mod events;
pub mod media;
pub mod queue;
pub mod time;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use media::{HeadlessMedia, MediaElement};
pub use time::{format_duration, format_time};
pub use types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, VolumeLevel};
