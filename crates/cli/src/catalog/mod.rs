//! Named frame sets available to the CLI
//!
//! Built-in sets come from [`constants`]; sets declared in the config file
//! are merged on top and replace built-ins of the same name.

pub mod constants;

use crate::config::Settings;
use bdev_core::{Error, FrameSequence, Result};
use constants::*;
use std::collections::BTreeMap;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Where a frame set was defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOrigin {
    Builtin,
    Config,
}

/// A named frame sequence with an optional preferred interval
#[derive(Debug, Clone)]
pub struct FrameSet {
    pub name: String,
    pub frames: FrameSequence,
    pub interval: Option<Duration>,
    pub origin: SetOrigin,
}

impl FrameSet {
    /// Display width of the widest frame line, in terminal columns
    pub fn display_width(&self) -> usize {
        self.frames
            .iter()
            .flat_map(str::lines)
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }
}

/// All frame sets, ordered by name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: BTreeMap<String, FrameSet>,
}

impl Catalog {
    /// The sets shipped with the binary
    pub fn builtin() -> Result<Self> {
        let table: [(&str, &[&str], Option<u64>); 8] = [
            ("loading", LOADING_FRAMES, None),
            ("processing", PROCESSING_FRAMES, None),
            ("building", BUILDING_FRAMES, None),
            ("connecting", CONNECTING_FRAMES, None),
            ("testing", TESTING_FRAMES, None),
            ("verifying", VERIFYING_FRAMES, None),
            ("build", BUILD_PROGRESS_FRAMES, Some(BUILD_PROGRESS_INTERVAL_MS)),
            ("test", TEST_PROGRESS_FRAMES, Some(BUILD_PROGRESS_INTERVAL_MS)),
        ];

        let mut catalog = Self::default();
        for (name, frames, interval_ms) in table {
            catalog.insert(FrameSet {
                name: name.to_string(),
                frames: FrameSequence::from_static(frames)?,
                interval: interval_ms.map(Duration::from_millis),
                origin: SetOrigin::Builtin,
            });
        }
        Ok(catalog)
    }

    /// Built-in sets overlaid with the ones from `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        for (name, set) in &settings.sets {
            catalog.insert(FrameSet {
                name: name.clone(),
                frames: set.frames.clone(),
                interval: set.interval_ms.map(Duration::from_millis),
                origin: SetOrigin::Config,
            });
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, set: FrameSet) {
        self.sets.insert(set.name.clone(), set);
    }

    pub fn get(&self, name: &str) -> Result<&FrameSet> {
        self.sets
            .get(name)
            .ok_or_else(|| Error::unknown_frame_set(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameSet> {
        self.sets.values()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("loading", 10)]
    #[case("processing", 8)]
    #[case("building", 8)]
    #[case("connecting", 8)]
    #[case("testing", 8)]
    #[case("verifying", 6)]
    #[case("build", 9)]
    #[case("test", 9)]
    fn test_builtin_sets(#[case] name: &str, #[case] frames: usize) {
        let catalog = Catalog::builtin().unwrap();
        let set = catalog.get(name).unwrap();
        assert_eq!(set.frames.len(), frames);
        assert_eq!(set.origin, SetOrigin::Builtin);
    }

    #[test]
    fn test_progress_bar_ends_at_completion() {
        let catalog = Catalog::builtin().unwrap();
        let build = catalog.get("build").unwrap();
        let last = build.frames.iter().last().unwrap();
        assert!(last.contains("100%"));
        assert_eq!(build.interval, Some(Duration::from_millis(400)));
    }

    #[test]
    fn test_suite_counter_plays_at_progress_bar_pace() {
        let catalog = Catalog::builtin().unwrap();
        let test = catalog.get("test").unwrap();
        assert!(test.frames[0].contains("000/847"));
        assert!(test.frames.iter().last().unwrap().contains("847/847"));
        assert_eq!(test.interval, Some(Duration::from_millis(BUILD_PROGRESS_INTERVAL_MS)));
    }

    #[test]
    fn test_unknown_set() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.get("nope").unwrap_err();
        assert_eq!(err.to_string(), "unknown frame set 'nope'");
    }

    #[test]
    fn test_config_sets_override_builtins() {
        let settings = Settings::from_toml(
            r#"
[sets.loading]
frames = ["."]

[sets.dots]
frames = ["·", "··"]
interval_ms = 50
"#,
        )
        .unwrap();
        let catalog = Catalog::from_settings(&settings).unwrap();

        let loading = catalog.get("loading").unwrap();
        assert_eq!(loading.origin, SetOrigin::Config);
        assert_eq!(loading.frames.len(), 1);

        let dots = catalog.get("dots").unwrap();
        assert_eq!(dots.interval, Some(Duration::from_millis(50)));
        assert_eq!(catalog.len(), Catalog::builtin().unwrap().len() + 1);
    }

    #[test]
    fn test_display_width_counts_columns() {
        let set = FrameSet {
            name: "wide".into(),
            frames: FrameSequence::from_static(&["ab", "◐ x", "╔══╗\n║ok║"]).unwrap(),
            interval: None,
            origin: SetOrigin::Builtin,
        };
        assert_eq!(set.display_width(), 4);
    }
}
