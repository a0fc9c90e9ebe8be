use std::sync::Arc;

/// Result type alias for bdev-frames operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bdev-frames operations
///
/// Errors are `Clone` so a single playback failure can be observed by every
/// waiter on a handle. I/O sources are kept behind an `Arc` for that reason.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed playback input, rejected before anything is scheduled
    #[error("invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// The sink refused a frame; playback for that handle stopped
    #[error("failed to write frame {frame_index} to sink: {source}")]
    SinkWrite {
        frame_index: usize,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Async runtime problems (no runtime, playback task lost)
    #[error("runtime error: {message}")]
    Runtime { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A frame set name that is neither built in nor configured
    #[error("unknown frame set '{name}'")]
    UnknownFrameSet { name: String },
}

impl Error {
    /// Whether this error was raised synchronously for bad input
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }

    /// Whether this error came from the output sink
    #[must_use]
    pub fn is_sink_write(&self) -> bool {
        matches!(self, Error::SinkWrite { .. })
    }
}
