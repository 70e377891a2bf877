//! Settings: optional TOML config file merged under CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use serde::Deserialize;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
  #[default]
  Monday,
  Sunday,
}

impl From<WeekStart> for Weekday {
  fn from(w: WeekStart) -> Self {
    match w {
      WeekStart::Monday => Weekday::Mon,
      WeekStart::Sunday => Weekday::Sun,
    }
  }
}

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  /// Seed the session with the demonstration events.
  pub sample_events:  Option<bool>,
  pub log_file:       Option<PathBuf>,
  #[serde(default)]
  pub week_starts_on: WeekStart,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// Fully-resolved settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub sample_events: bool,
  pub log_file:      Option<PathBuf>,
  pub week_start:    Weekday,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  pub fn resolve(file: ConfigFile, empty: bool, log_file: Option<PathBuf>) -> Self {
    Self {
      sample_events: !empty && file.sample_events.unwrap_or(true),
      log_file:      log_file.or(file.log_file).map(|p| expand_tilde(&p)),
      week_start:    file.week_starts_on.into(),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    let file: ConfigFile = toml::from_str("").unwrap();
    let s = Settings::resolve(file, false, None);
    assert!(s.sample_events);
    assert_eq!(s.log_file, None);
    assert_eq!(s.week_start, Weekday::Mon);
  }

  #[test]
  fn file_values_are_read() {
    let file: ConfigFile = toml::from_str(
      "sample_events = false\nlog_file = \"/tmp/planner.log\"\nweek_starts_on = \"sunday\"\n",
    )
    .unwrap();
    let s = Settings::resolve(file, false, None);
    assert!(!s.sample_events);
    assert_eq!(s.log_file, Some(PathBuf::from("/tmp/planner.log")));
    assert_eq!(s.week_start, Weekday::Sun);
  }

  #[test]
  fn flags_override_file() {
    let file: ConfigFile = toml::from_str(
      "sample_events = true\nlog_file = \"/tmp/a.log\"\n",
    )
    .unwrap();
    let s = Settings::resolve(file, true, Some(PathBuf::from("/tmp/b.log")));
    assert!(!s.sample_events);
    assert_eq!(s.log_file, Some(PathBuf::from("/tmp/b.log")));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<ConfigFile>("colour = \"red\"").is_err());
  }

  #[test]
  fn non_tilde_paths_are_untouched() {
    assert_eq!(
      expand_tilde(Path::new("/var/log/planner.log")),
      PathBuf::from("/var/log/planner.log")
    );
  }
}
