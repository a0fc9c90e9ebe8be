use super::FrameSink;
use std::io::{self, Write};

/// Writes each frame as its own line to any `Write` destination.
///
/// The frame and its newline go out in a single `write_all` followed by a
/// flush, so a frame is never split between two writes.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    buffer: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: String::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> FrameSink for WriterSink<W> {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.push_str(frame);
        self.buffer.push('\n');
        self.writer.write_all(self.buffer.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_newline_terminated() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_frame("[▰▱▱] 03%").unwrap();
        sink.write_frame("[▰▰▰] 100%").unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[▰▱▱] 03%\n[▰▰▰] 100%\n");
    }

    #[test]
    fn test_write_errors_propagate() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Broken);
        let err = sink.write_frame("A").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
