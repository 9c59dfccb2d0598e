//! Groove Player terminal front end
//!
//! A line-driven presenter over `groove-session`, with a simulated clock
//! in place of audio output. This library exposes the pieces for testing.

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod presenter;

pub use clock::SharedMedia;
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use presenter::TerminalPresenter;

use groove_core::Catalog;
use groove_playback::HeadlessMedia;
use groove_session::Session;

/// Catalog named by the config, or the built-in sample
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match config.catalog.path {
        Some(ref path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::sample()),
    }
}

/// Build a session over the simulated clock
///
/// Returns the presenter's handle to the clock alongside the session.
pub fn build_session(config: &AppConfig, catalog: Catalog) -> Result<(Session<SharedMedia>, SharedMedia)> {
    let clock = SharedMedia::new(HeadlessMedia::with_default_duration(
        config.catalog.track_duration_secs,
    ));
    let session = Session::new(catalog, clock.clone(), config.playback.clone())?;
    Ok((session, clock))
}
