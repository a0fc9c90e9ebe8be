//! Playback engine: one tokio task per started sequence

use crate::config::PlaybackConfig;
use crate::handle::{PlaybackHandle, PlaybackId, Progress};
use crate::sink::FrameSink;
use bdev_core::{AnimationStatus, Error, FrameSequence, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn, Instrument};

/// Starts playbacks on a tokio runtime
#[derive(Debug, Clone)]
pub struct Animator {
    runtime: Handle,
}

impl Animator {
    /// Use the runtime of the calling context
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::with_runtime)
            .map_err(|e| Error::runtime(format!("frame playback needs a tokio runtime: {e}")))
    }

    /// Use an explicit runtime, for starting playbacks from plain threads
    pub fn with_runtime(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Start playing `sequence`.
    ///
    /// Returns as soon as the playback is scheduled. The first frame is
    /// written on the first tick, immediately after scheduling.
    pub fn start(&self, sequence: FrameSequence, config: PlaybackConfig) -> Result<PlaybackHandle> {
        config.validate()?;
        let (interval, repeat, sink) = config.into_parts();

        let id = PlaybackId::next();
        let token = CancellationToken::new();
        let (progress_tx, progress_rx) = watch::channel(Progress::default());

        debug!(
            playback = %id,
            frames = sequence.len(),
            interval_ms = interval.as_millis() as u64,
            repeat,
            "starting frame playback"
        );

        let playback = Playback {
            id,
            sequence,
            sink,
            interval,
            repeat,
            token: token.clone(),
            progress: progress_tx,
        };
        let span = tracing::debug_span!("playback", id = %id);
        self.runtime.spawn(playback.run().instrument(span));

        Ok(PlaybackHandle::new(id, token, progress_rx))
    }

    /// Start playing a raw frame list, rejecting an empty one
    pub fn start_frames<I, S>(&self, frames: I, config: PlaybackConfig) -> Result<PlaybackHandle>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sequence = FrameSequence::new(frames)?;
        self.start(sequence, config)
    }
}

/// Start a playback on the current tokio runtime
pub fn start(sequence: FrameSequence, config: PlaybackConfig) -> Result<PlaybackHandle> {
    Animator::current()?.start(sequence, config)
}

/// Start a playback of a raw frame list on the current tokio runtime
pub fn start_frames<I, S>(frames: I, config: PlaybackConfig) -> Result<PlaybackHandle>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // Validate before touching the runtime so bad input reports as such.
    let sequence = FrameSequence::new(frames)?;
    start(sequence, config)
}

struct Playback {
    id: PlaybackId,
    sequence: FrameSequence,
    sink: Box<dyn FrameSink>,
    interval: Duration,
    repeat: bool,
    token: CancellationToken,
    progress: watch::Sender<Progress>,
}

impl Playback {
    async fn run(mut self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut index = 0;

        loop {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => {
                    self.finish(AnimationStatus::Cancelled);
                    return;
                }
                _ = ticker.tick() => {}
            }

            self.set_status(AnimationStatus::Running);

            trace!(index, "writing frame");
            if let Err(e) = self.sink.write_frame(&self.sequence[index]) {
                warn!(playback = %self.id, frame = index, error = %e, "sink rejected frame, stopping playback");
                self.progress.send_modify(|p| {
                    p.state.transition(AnimationStatus::Failed);
                    p.failure = Some(Error::sink_write(index, e));
                });
                return;
            }

            let next = self.sequence.next_index(index, self.repeat);
            self.progress.send_modify(|p| {
                p.state.frames_written += 1;
                if let Some(next) = next {
                    p.state.index = next;
                }
            });

            match next {
                Some(next) => index = next,
                None => {
                    self.finish(AnimationStatus::Completed);
                    return;
                }
            }
        }
    }

    fn set_status(&self, status: AnimationStatus) {
        self.progress.send_if_modified(|p| p.state.transition(status));
    }

    /// Let the sink clean up, then publish the terminal status.
    ///
    /// The status goes out last so anyone waiting on it also observes the
    /// sink's final output.
    fn finish(&mut self, status: AnimationStatus) {
        if let Err(e) = self.sink.finish() {
            warn!(playback = %self.id, error = %e, "sink failed to finish cleanly");
        }
        let frames_written = self.progress.borrow().state.frames_written;
        self.set_status(status);
        debug!(playback = %self.id, %status, frames_written, "frame playback ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use bdev_core::PlaybackOutcome;
    use std::io;

    /// Fails every write from the `fail_at`-th attempt on (1-based)
    struct FailingSink {
        inner: MemorySink,
        attempts: usize,
        fail_at: usize,
    }

    impl FrameSink for FailingSink {
        fn write_frame(&mut self, frame: &str) -> io::Result<()> {
            self.attempts += 1;
            if self.attempts >= self.fail_at {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"));
            }
            self.inner.write_frame(frame)
        }
    }

    fn memory_config(sink: &MemorySink, millis: u64) -> PlaybackConfig {
        PlaybackConfig::new(sink.clone()).with_interval(Duration::from_millis(millis))
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_once_writes_every_frame_then_completes() {
        let sink = MemorySink::new();
        let handle = start_frames(["A", "B", "C"], memory_config(&sink, 10)).unwrap();

        assert_eq!(handle.wait().await.unwrap(), PlaybackOutcome::Completed);
        assert_eq!(sink.frames(), vec!["A", "B", "C"]);
        assert_eq!(sink.finish_count(), 1);

        let state = handle.state();
        assert_eq!(state.status, AnimationStatus::Completed);
        assert_eq!(state.frames_written, 3);
        assert_eq!(state.index, 2);
    }

    #[tokio::test]
    async fn test_empty_sequence_is_rejected_without_writes() {
        let sink = MemorySink::new();
        let err = start_frames(Vec::<String>::new(), memory_config(&sink, 10)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_is_rejected_without_writes() {
        let sink = MemorySink::new();
        let config = PlaybackConfig::new(sink.clone()).with_interval(Duration::ZERO);
        let err = start_frames(["A"], config).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let sink = MemorySink::new();
        let sequence = FrameSequence::from_static(&["A"]).unwrap();
        let err = start(sequence, memory_config(&sink, 10)).unwrap_err();
        assert!(matches!(err, Error::Runtime { .. }));
        assert!(sink.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_failure_stops_playback() {
        let sink = MemorySink::new();
        let failing = FailingSink {
            inner: sink.clone(),
            attempts: 0,
            fail_at: 2,
        };
        let config = PlaybackConfig::new(failing).with_interval(Duration::from_millis(10));
        let handle = start_frames(["one", "two", "three"], config).unwrap();

        let err = handle.wait().await.unwrap_err();
        match err {
            Error::SinkWrite { frame_index, .. } => assert_eq!(frame_index, 1),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(sink.frames(), vec!["one"]);
        assert_eq!(handle.status(), AnimationStatus::Failed);
        assert_eq!(sink.finish_count(), 0);

        // Give a would-be third tick every chance to fire.
        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sink.frames(), vec!["one"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_tick() {
        let sink = MemorySink::new();
        let handle = start_frames(["A", "B"], memory_config(&sink, 10)).unwrap();

        // The spawned task has not been polled yet on this single-threaded runtime.
        handle.request_cancel();
        assert_eq!(handle.cancel().await, AnimationStatus::Cancelled);
        assert!(sink.is_empty());
        assert_eq!(handle.wait().await.unwrap(), PlaybackOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_keeps_completed() {
        let sink = MemorySink::new();
        let handle = start_frames(["A"], memory_config(&sink, 10)).unwrap();

        handle.wait().await.unwrap();
        assert_eq!(handle.cancel().await, AnimationStatus::Completed);
        assert_eq!(handle.cancel().await, AnimationStatus::Completed);
        assert_eq!(handle.wait().await.unwrap(), PlaybackOutcome::Completed);
    }

    #[test]
    fn test_start_on_explicit_runtime_from_plain_thread() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let animator = Animator::with_runtime(runtime.handle().clone());

        let sink = MemorySink::new();
        let handle = animator
            .start_frames(["A", "B"], memory_config(&sink, 1))
            .unwrap();

        let outcome = runtime.block_on(handle.wait()).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(sink.frames(), vec!["A", "B"]);
    }
}
