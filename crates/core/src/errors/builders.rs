//! Builder methods for creating errors with context

use super::types::Error;
use std::sync::Arc;

impl Error {
    /// Create an invalid input error for the named field
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a sink write error for the frame at `frame_index`
    #[must_use]
    pub fn sink_write(frame_index: usize, source: std::io::Error) -> Self {
        Error::SinkWrite {
            frame_index,
            source: Arc::new(source),
        }
    }

    /// Create a runtime error
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown frame set error
    #[must_use]
    pub fn unknown_frame_set(name: impl Into<String>) -> Self {
        Error::UnknownFrameSet { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_invalid_input_message() {
        let err = Error::invalid_input("sequence", "must contain at least one frame");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid sequence: must contain at least one frame"
        );
    }

    #[test]
    fn test_sink_write_keeps_source() {
        let err = Error::sink_write(1, io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.is_sink_write());
        assert!(err.to_string().contains("frame 1"));

        let source = err.source().expect("sink errors carry their io source");
        assert_eq!(source.to_string(), "pipe closed");
    }

    #[test]
    fn test_errors_are_cloneable() {
        let err = Error::sink_write(0, io::Error::other("boom"));
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
