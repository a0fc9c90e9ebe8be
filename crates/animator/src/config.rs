//! Playback configuration

use crate::sink::FrameSink;
use bdev_core::{errors::Validate, Result, DEFAULT_FRAME_INTERVAL, DEFAULT_REPEAT};
use std::fmt;
use std::time::Duration;

/// How a sequence is played and where its frames go.
///
/// Supplied once at start and never mutated while the playback runs.
pub struct PlaybackConfig {
    interval: Duration,
    repeat: bool,
    sink: Box<dyn FrameSink>,
}

impl PlaybackConfig {
    /// Play once at the default interval into `sink`
    pub fn new(sink: impl FrameSink + 'static) -> Self {
        Self {
            interval: DEFAULT_FRAME_INTERVAL,
            repeat: DEFAULT_REPEAT,
            sink: Box::new(sink),
        }
    }

    /// Set the delay between two frames
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Loop the sequence until cancelled instead of playing it once
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    /// Reject settings that cannot drive a timer
    pub fn validate(&self) -> Result<()> {
        Validate::positive_duration(self.interval, "interval")
    }

    pub(crate) fn into_parts(self) -> (Duration, bool, Box<dyn FrameSink>) {
        (self.interval, self.repeat, self.sink)
    }
}

impl fmt::Debug for PlaybackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackConfig")
            .field("interval", &self.interval)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}
