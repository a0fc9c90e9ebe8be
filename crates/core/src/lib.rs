//! Core domain types, errors, and constants for `bdev-frames`.
//!
//! ## Key Components
//!
//! - **`errors`**: The shared `Error` enum and `Result` alias used by the
//!   animator and the CLI.
//! - **`types`**: `FrameSequence` and the playback state machine types.
//! - **`constants`**: Playback defaults and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
