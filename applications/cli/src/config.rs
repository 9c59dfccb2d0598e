/// Terminal front end configuration
use crate::error::{CliError, Result};
use groove_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "groove.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON catalog file; the built-in sample catalog when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Length reported by the simulated media element for every track
    #[serde(default = "default_track_duration_secs")]
    pub track_duration_secs: f64,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `groove.toml` is read if
    /// present. `GROOVE_` variables override the file, with `__` between
    /// nesting levels (`GROOVE_PLAYBACK__VOLUME=0.5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        // Override with environment variables (prefixed with GROOVE_)
        settings = settings.add_source(
            config::Environment::with_prefix("GROOVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let playback = &self.playback;

        if !(0.0..=1.0).contains(&playback.volume) {
            return Err(CliError::Config(format!(
                "playback.volume must be within 0.0-1.0, got {}",
                playback.volume
            )));
        }

        if !is_positive(playback.seek_step_secs) {
            return Err(CliError::Config(
                "playback.seek_step_secs must be positive".to_string(),
            ));
        }

        if !is_positive(f64::from(playback.volume_step)) || playback.volume_step > 1.0 {
            return Err(CliError::Config(
                "playback.volume_step must be within (0.0, 1.0]".to_string(),
            ));
        }

        if !is_positive(self.catalog.track_duration_secs) {
            return Err(CliError::Config(
                "catalog.track_duration_secs must be positive".to_string(),
            ));
        }

        if let Some(ref path) = self.catalog.path {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Catalog file not found at {path:?}"
                )));
            }
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        path: None,
        track_duration_secs: default_track_duration_secs(),
    }
}

fn default_track_duration_secs() -> f64 {
    180.0
}

impl Default for CatalogSettings {
    fn default() -> Self {
        default_catalog()
    }
}
