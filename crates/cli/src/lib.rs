//! Command line front end for frame playback
//!
//! Picks a frame set (built in, or declared in the user's config file),
//! turns it into a playback and drives it against stdout.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod logging;

pub use catalog::{Catalog, FrameSet, SetOrigin};
pub use config::{ConfigLoader, Settings};
