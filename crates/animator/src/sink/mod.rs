//! Output destinations for frames
//!
//! A sink receives whole frames, one call per tick. Implementations must
//! emit a frame completely or fail; a frame is never split across calls.

mod memory;
mod shared;
mod terminal;
mod writer;

pub use memory::MemorySink;
pub use shared::SharedSink;
pub use terminal::TerminalSink;
pub use writer::WriterSink;

use std::io;

/// Destination for animation frames
pub trait FrameSink: Send {
    /// Write one complete frame
    fn write_frame(&mut self, frame: &str) -> io::Result<()>;

    /// Called once after the last frame of a completed or cancelled playback
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        (**self).write_frame(frame)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
