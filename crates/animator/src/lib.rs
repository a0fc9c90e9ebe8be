//! Frame-sequenced animation playback for terminal status indicators
//!
//! This crate plays a [`FrameSequence`] against a [`PlaybackConfig`]:
//! one frame per tick, written to a [`FrameSink`], until the sequence is
//! exhausted, the caller cancels, or the sink fails.
//!
//! - [`Animator`] spawns one tokio task per playback
//! - [`PlaybackHandle`] cancels a playback and reports how it ended
//! - [`sink`] holds the output destinations (writers, in-place terminal
//!   line, in-memory capture, shared sinks)
//!
//! ```rust,no_run
//! use bdev_animator::{Animator, PlaybackConfig, sink::WriterSink};
//! use bdev_core::FrameSequence;
//! use std::time::Duration;
//!
//! # async fn example() -> bdev_core::Result<()> {
//! let frames = FrameSequence::from_static(&["⠋", "⠙", "⠹", "⠸"])?;
//! let config = PlaybackConfig::new(WriterSink::stdout())
//!     .with_interval(Duration::from_millis(80))
//!     .with_repeat(true);
//!
//! let handle = Animator::current()?.start(frames, config)?;
//! tokio::time::sleep(Duration::from_secs(1)).await;
//! handle.cancel().await;
//! # Ok(())
//! # }
//! ```

pub mod animator;
pub mod config;
pub mod handle;
pub mod sink;

pub use animator::{start, start_frames, Animator};
pub use bdev_core::{AnimationState, AnimationStatus, Error, FrameSequence, PlaybackOutcome, Result};
pub use config::PlaybackConfig;
pub use handle::{PlaybackHandle, PlaybackId};
pub use sink::FrameSink;
