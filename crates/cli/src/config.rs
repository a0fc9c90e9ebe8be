//! Configuration file loading
//!
//! Settings come from a TOML file. Lookup order: an explicit path (the
//! `--config` flag), then `BDEV_FRAMES_CONFIG`, then
//! `<config dir>/bdev/frames.toml`. Only the last one may be missing.

use bdev_core::{
    Error, FrameSequence, Result, ResultExt, BDEV_CONFIG_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    DEFAULT_FRAME_INTERVAL, DEFAULT_REPEAT,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Parsed contents of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub sets: BTreeMap<String, FrameSetConfig>,
}

/// Defaults applied to every playback
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackSettings {
    pub interval_ms: u64,
    pub repeat: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
            repeat: DEFAULT_REPEAT,
        }
    }
}

impl PlaybackSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// A user-declared frame set
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameSetConfig {
    pub frames: FrameSequence,
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("invalid configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject intervals that cannot drive playback
    pub fn validate(&self) -> Result<()> {
        if self.playback.interval_ms == 0 {
            return Err(Error::invalid_input(
                "playback.interval_ms",
                "must be greater than zero",
            ));
        }
        for (name, set) in &self.sets {
            if set.interval_ms == Some(0) {
                return Err(Error::invalid_input(
                    format!("sets.{name}.interval_ms"),
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}

/// Locates and reads the configuration file
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Path given on the command line
    path: Option<PathBuf>,
    /// Value of the config path environment variable
    env_path: Option<PathBuf>,
    /// Platform default location
    default_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that consults the environment and the platform config dir
    pub fn new() -> Self {
        Self {
            path: None,
            env_path: std::env::var_os(BDEV_CONFIG_VAR).map(PathBuf::from),
            default_path: dirs::config_dir()
                .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }

    /// Set an explicit configuration file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the environment-provided path
    pub fn env_path(mut self, path: Option<PathBuf>) -> Self {
        self.env_path = path;
        self
    }

    /// Override the default location
    pub fn default_path(mut self, path: Option<PathBuf>) -> Self {
        self.default_path = path;
        self
    }

    /// Load the settings
    pub fn load(self) -> Result<Settings> {
        if let Some(path) = self.path.or(self.env_path) {
            return read_settings(&path);
        }

        match self.default_path {
            Some(path) if path.exists() => read_settings(&path),
            Some(path) => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Settings::default())
            }
            None => Ok(Settings::default()),
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    debug!(path = %path.display(), "loading configuration");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    Settings::from_toml(&text).map_err(|e| match e {
        Error::Configuration { message } => {
            Error::configuration(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}
