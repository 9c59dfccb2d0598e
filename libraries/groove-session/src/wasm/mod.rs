//! WASM bindings for groove-session
//!
//! Exposes a `Session` driving a browser `HTMLAudioElement`, so a web page
//! can act as the presenter: it forwards intents and audio events and
//! renders the snapshots it is handed.

#![allow(unsafe_code)]

#[cfg(feature = "wasm")]
pub mod media;

#[cfg(feature = "wasm")]
pub mod player;

#[cfg(feature = "wasm")]
pub use media::HtmlAudioMedia;

#[cfg(feature = "wasm")]
pub use player::WasmPlayer;
