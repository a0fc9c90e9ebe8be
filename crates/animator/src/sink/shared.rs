use super::FrameSink;
use std::io;
use std::sync::{Arc, Mutex};

/// Lets several playbacks target one destination.
///
/// Every frame is written while holding the lock, so frames from different
/// handles never interleave inside the wrapped sink.
#[derive(Debug)]
pub struct SharedSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S: FrameSink> SharedSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Run `f` against the wrapped sink
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut S) -> R) -> io::Result<R> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("shared sink lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: FrameSink> FrameSink for SharedSink<S> {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.with_inner(|sink| sink.write_frame(frame))?
    }

    fn finish(&mut self) -> io::Result<()> {
        self.with_inner(|sink| sink.finish())?
    }
}
