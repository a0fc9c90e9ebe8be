use crate::catalog::{Catalog, FrameSet};
use crate::config::Settings;
use anyhow::{Context, Result};
use bdev_animator::sink::{TerminalSink, WriterSink};
use bdev_animator::{Animator, PlaybackConfig};
use bdev_core::FrameSequence;
use clap::Args;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Frame set name (see `bdev-frames list`)
    pub name: String,

    /// Milliseconds between frames (overrides the set and config defaults)
    #[arg(short, long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Loop the set until interrupted
    #[arg(short, long)]
    pub repeat: bool,

    /// Play the set once even if the config enables looping
    #[arg(long, conflicts_with = "repeat")]
    pub once: bool,

    /// Stop after this many milliseconds
    #[arg(short, long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Print one frame per line instead of redrawing in place
    #[arg(long)]
    pub plain: bool,

    /// Text shown after every frame
    #[arg(short, long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Message printed once playback ends without error
    #[arg(long, value_name = "MSG")]
    pub done: Option<String>,
}

impl PlayArgs {
    /// Interval precedence: flag, then the set's own, then the config default
    pub fn resolve_interval(&self, set: &FrameSet, settings: &Settings) -> Duration {
        self.interval
            .map(Duration::from_millis)
            .or(set.interval)
            .unwrap_or_else(|| settings.playback.interval())
    }

    /// `--once` beats `--repeat`, which beats the config default
    pub fn resolve_repeat(&self, settings: &Settings) -> bool {
        if self.once {
            return false;
        }
        self.repeat || settings.playback.repeat
    }

    /// The set's frames, each followed by the label if one was given
    pub fn frames(&self, set: &FrameSet) -> bdev_core::Result<FrameSequence> {
        match &self.label {
            Some(label) => FrameSequence::new(set.frames.iter().map(|f| format!("{f} {label}"))),
            None => Ok(set.frames.clone()),
        }
    }
}

pub async fn execute(args: PlayArgs, catalog: &Catalog, settings: &Settings) -> Result<()> {
    let set = catalog.get(&args.name)?;
    let interval = args.resolve_interval(set, settings);
    let repeat = args.resolve_repeat(settings);

    let config = if args.plain || !io::stdout().is_terminal() {
        PlaybackConfig::new(WriterSink::stdout())
    } else {
        PlaybackConfig::new(TerminalSink::stdout())
    }
    .with_interval(interval)
    .with_repeat(repeat);

    let handle = Animator::current()?.start(args.frames(set)?, config)?;
    info!(set = %set.name, playback = %handle.id(), ?interval, repeat, "playing frame set");

    let deadline = async {
        match args.duration {
            Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        _ = handle.wait() => {}
        _ = tokio::signal::ctrl_c() => {
            debug!("interrupted");
            handle.cancel().await;
        }
        _ = deadline => {
            debug!("duration elapsed");
            handle.cancel().await;
        }
    }

    let outcome = handle
        .wait()
        .await
        .with_context(|| format!("playback of '{}' failed", set.name))?;
    debug!(?outcome, frames = handle.state().frames_written, "playback finished");

    if let Some(done) = &args.done {
        println!("{done}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SetOrigin;

    fn args(interval: Option<u64>, repeat: bool) -> PlayArgs {
        PlayArgs {
            name: "test".into(),
            interval,
            repeat,
            once: false,
            duration: None,
            plain: true,
            label: None,
            done: None,
        }
    }

    fn set(interval_ms: Option<u64>) -> FrameSet {
        FrameSet {
            name: "test".into(),
            frames: FrameSequence::from_static(&["a"]).unwrap(),
            interval: interval_ms.map(Duration::from_millis),
            origin: SetOrigin::Config,
        }
    }

    #[test]
    fn test_interval_precedence() {
        let settings = Settings::from_toml("[playback]\ninterval_ms = 70\n").unwrap();

        assert_eq!(
            args(Some(5), false).resolve_interval(&set(Some(50)), &settings),
            Duration::from_millis(5)
        );
        assert_eq!(
            args(None, false).resolve_interval(&set(Some(50)), &settings),
            Duration::from_millis(50)
        );
        assert_eq!(
            args(None, false).resolve_interval(&set(None), &settings),
            Duration::from_millis(70)
        );
    }

    #[test]
    fn test_repeat_from_flag_or_config() {
        let looping = Settings::from_toml("[playback]\nrepeat = true\n").unwrap();
        let once = Settings::default();

        assert!(args(None, false).resolve_repeat(&looping));
        assert!(args(None, true).resolve_repeat(&once));
        assert!(!args(None, false).resolve_repeat(&once));
    }

    #[test]
    fn test_once_overrides_looping_config() {
        let looping = Settings::from_toml("[playback]\nrepeat = true\n").unwrap();
        let mut play = args(None, false);
        play.once = true;
        assert!(!play.resolve_repeat(&looping));
    }

    #[test]
    fn test_label_follows_each_frame() {
        let set = FrameSet {
            frames: FrameSequence::from_static(&["⠋", "⠙"]).unwrap(),
            ..set(None)
        };
        let mut play = args(None, false);
        assert_eq!(play.frames(&set).unwrap(), set.frames);

        play.label = Some("Fetching".into());
        let labelled = play.frames(&set).unwrap();
        assert_eq!(labelled.iter().collect::<Vec<_>>(), vec!["⠋ Fetching", "⠙ Fetching"]);
    }
}
