//! Playback state machine types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single playback.
///
/// `Idle -> Running -> {Completed, Cancelled, Failed}`. Terminal states are
/// never left; a new playback always starts from a fresh `Idle` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStatus {
    /// Handle created, first tick not yet fired
    Idle,
    /// Frames are being written
    Running,
    /// Every frame of a play-once sequence was written
    Completed,
    /// Stopped by the caller
    Cancelled,
    /// Stopped by a sink write failure
    Failed,
}

impl AnimationStatus {
    /// Whether no further frames will ever be written
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AnimationStatus::Completed | AnimationStatus::Cancelled | AnimationStatus::Failed
        )
    }

    /// Whether moving to `next` is a legal transition
    #[must_use]
    pub fn can_transition_to(self, next: AnimationStatus) -> bool {
        use AnimationStatus::*;
        matches!(
            (self, next),
            (Idle, Running) | (Idle, Cancelled) | (Running, Completed | Cancelled | Failed)
        )
    }
}

impl fmt::Display for AnimationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnimationStatus::Idle => "idle",
            AnimationStatus::Running => "running",
            AnimationStatus::Completed => "completed",
            AnimationStatus::Cancelled => "cancelled",
            AnimationStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Snapshot of one playback's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Frame the next tick writes.
    ///
    /// Once terminal: the last frame after `Completed`, the rejected frame
    /// after `Failed`, and the first unwritten frame after `Cancelled`.
    pub index: usize,
    pub status: AnimationStatus,
    /// Successful writes so far
    pub frames_written: usize,
}

impl AnimationState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 0,
            status: AnimationStatus::Idle,
            frames_written: 0,
        }
    }

    /// Move to `next`, ignoring illegal transitions.
    ///
    /// Returns whether the status changed.
    pub fn transition(&mut self, next: AnimationStatus) -> bool {
        if self.status.can_transition_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// How a playback ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackOutcome {
    Completed,
    Cancelled,
}
