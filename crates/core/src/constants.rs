//! Constants used throughout the bdev-frames codebase

use std::time::Duration;

// Playback defaults
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_REPEAT: bool = false;

// Environment variable names
pub const BDEV_LOG_VAR: &str = "BDEV_LOG";
pub const BDEV_CONFIG_VAR: &str = "BDEV_FRAMES_CONFIG";

// Configuration file location, relative to the platform config dir
pub const CONFIG_DIR_NAME: &str = "bdev";
pub const CONFIG_FILE_NAME: &str = "frames.toml";
