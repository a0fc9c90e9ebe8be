//! Core domain types for frame playback.
//!
//! - **`frames`**: the validated, immutable `FrameSequence`
//! - **`playback`**: the playback state machine (`AnimationStatus`,
//!   `AnimationState`, `PlaybackOutcome`)

pub mod frames;
pub mod playback;

pub use frames::*;
pub use playback::*;
