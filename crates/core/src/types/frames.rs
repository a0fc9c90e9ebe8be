//! Validated frame sequences

use crate::errors::{Error, Result, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// An ordered, non-empty, immutable list of pre-rendered frames.
///
/// Frames are opaque text; the sequence only guarantees order and
/// non-emptiness. Clones share the same storage.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FrameSequence(Arc<[String]>);

impl FrameSequence {
    /// Create a sequence, rejecting an empty frame list
    pub fn new<I, S>(frames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        Validate::not_empty(&frames, "sequence")?;
        Ok(Self(frames.into()))
    }

    /// Build a sequence from a static frame table
    pub fn from_static(frames: &[&str]) -> Result<Self> {
        Self::new(frames.iter().copied())
    }

    /// Number of frames, always at least one
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Index of the frame that follows `index`.
    ///
    /// Returns `None` at the end of the sequence unless `wrap` is set, in
    /// which case playback restarts at the first frame.
    pub fn next_index(&self, index: usize, wrap: bool) -> Option<usize> {
        let next = index + 1;
        if next < self.len() {
            Some(next)
        } else if wrap {
            Some(0)
        } else {
            None
        }
    }
}

impl Index<usize> for FrameSequence {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Debug for FrameSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSequence")
            .field("len", &self.len())
            .field("first", &self.0.first())
            .finish()
    }
}

impl TryFrom<Vec<String>> for FrameSequence {
    type Error = Error;

    fn try_from(frames: Vec<String>) -> Result<Self> {
        Self::new(frames)
    }
}

impl TryFrom<&[&str]> for FrameSequence {
    type Error = Error;

    fn try_from(frames: &[&str]) -> Result<Self> {
        Self::from_static(frames)
    }
}

impl From<FrameSequence> for Vec<String> {
    fn from(sequence: FrameSequence) -> Self {
        sequence.0.to_vec()
    }
}
