use super::FrameSink;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Records frames in memory.
///
/// Clones share the same storage, so a caller can keep one clone for
/// inspection while the animator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Arc<Mutex<Vec<String>>>,
    finished: Arc<AtomicUsize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames written so far, in write order
    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `finish` was called
    pub fn finish_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        let mut frames = self
            .frames
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        frames.push(frame.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
