//! Handles to running playbacks

use bdev_core::{AnimationState, AnimationStatus, Error, PlaybackOutcome, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

static NEXT_PLAYBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of one playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackId(u64);

impl PlaybackId {
    pub(crate) fn next() -> Self {
        Self(NEXT_PLAYBACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlaybackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback-{}", self.0)
    }
}

/// What the playback task publishes after every step
#[derive(Debug, Clone, Default)]
pub(crate) struct Progress {
    pub state: AnimationState,
    pub failure: Option<Error>,
}

impl Progress {
    fn outcome(&self) -> Result<PlaybackOutcome> {
        match self.state.status {
            AnimationStatus::Completed => Ok(PlaybackOutcome::Completed),
            AnimationStatus::Cancelled => Ok(PlaybackOutcome::Cancelled),
            AnimationStatus::Failed => Err(self
                .failure
                .clone()
                .unwrap_or_else(|| Error::runtime("playback failed without an error"))),
            status => Err(Error::runtime(format!(
                "playback is still {status}, no outcome yet"
            ))),
        }
    }
}

/// Cancellable reference to one playback.
///
/// Clones refer to the same playback. Dropping a handle does not stop the
/// playback; call [`PlaybackHandle::cancel`] for that.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    id: PlaybackId,
    token: CancellationToken,
    progress: watch::Receiver<Progress>,
}

impl PlaybackHandle {
    pub(crate) fn new(
        id: PlaybackId,
        token: CancellationToken,
        progress: watch::Receiver<Progress>,
    ) -> Self {
        Self {
            id,
            token,
            progress,
        }
    }

    pub fn id(&self) -> PlaybackId {
        self.id
    }

    /// Snapshot of the playback's current state
    pub fn state(&self) -> AnimationState {
        self.progress.borrow().state
    }

    pub fn status(&self) -> AnimationStatus {
        self.state().status
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_terminal()
    }

    /// Ask the playback to stop without waiting for it.
    ///
    /// Safe from any context, including inside a sink's `write_frame`. The
    /// frame being written (if any) completes; no later frame is written.
    pub fn request_cancel(&self) {
        self.token.cancel();
    }

    /// Stop the playback and wait until it has stopped.
    ///
    /// Idempotent. Once this returns no further frame is written for this
    /// handle. Returns the final status, which stays `Completed` or `Failed`
    /// when the playback had already ended on its own.
    pub async fn cancel(&self) -> AnimationStatus {
        self.token.cancel();
        match self.wait_terminal().await {
            Ok(progress) => progress.state.status,
            Err(_) => self.status(),
        }
    }

    /// Wait for the playback to end.
    ///
    /// Resolves to the outcome, or to the sink error that stopped it.
    pub async fn wait(&self) -> Result<PlaybackOutcome> {
        self.wait_terminal().await?.outcome()
    }

    async fn wait_terminal(&self) -> Result<Progress> {
        let mut progress = self.progress.clone();
        let result = progress
            .wait_for(|p| p.state.status.is_terminal())
            .await
            .map(|p| Progress::clone(&p));

        // The sender only goes away early if the task panicked or its
        // runtime shut down.
        result.map_err(|_| {
            Error::runtime(format!(
                "{} stopped without reporting a final state",
                self.id
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_ids_are_unique() {
        let a = PlaybackId::next();
        let b = PlaybackId::next();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("playback-"));
    }

    #[test]
    fn test_progress_outcomes() {
        let mut progress = Progress::default();
        assert!(progress.outcome().is_err());

        progress.state.status = AnimationStatus::Completed;
        assert_eq!(progress.outcome().unwrap(), PlaybackOutcome::Completed);

        progress.state.status = AnimationStatus::Cancelled;
        assert_eq!(progress.outcome().unwrap(), PlaybackOutcome::Cancelled);

        progress.state.status = AnimationStatus::Failed;
        progress.failure = Some(Error::sink_write(1, std::io::Error::other("gone")));
        assert!(progress.outcome().unwrap_err().is_sink_write());
    }

    #[tokio::test]
    async fn test_dropped_sender_reports_runtime_error() {
        let (tx, rx) = watch::channel(Progress::default());
        let handle = PlaybackHandle::new(PlaybackId::next(), CancellationToken::new(), rx);
        drop(tx);

        let err = handle.wait().await.unwrap_err();
        assert!(matches!(err, Error::Runtime { .. }));
        assert_eq!(handle.cancel().await, AnimationStatus::Idle);
    }
}
