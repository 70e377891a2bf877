//! Event types — the entries that make up a planner session.
//!
//! An event belongs to a single calendar day. Its time of day is a free-form
//! label kept beside the date, never combined with it.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use uuid::Uuid;

use crate::Error;

// ─── Event type ──────────────────────────────────────────────────────────────

/// The closed set of event categories.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Display,
  EnumIter,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
  #[default]
  Meeting,
  Party,
  Business,
}

impl EventType {
  /// Human-readable label used in lists and the dialog.
  pub fn label(self) -> &'static str {
    match self {
      Self::Meeting => "Meeting",
      Self::Party => "Party",
      Self::Business => "Business meeting",
    }
  }

  /// The next variant in declaration order, wrapping around.
  pub fn next(self) -> Self { cycle(self, 1) }

  /// The previous variant in declaration order, wrapping around.
  pub fn prev(self) -> Self { cycle(self, -1) }
}

impl FromStr for EventType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::iter()
      .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| Error::UnknownEventType(s.to_owned()))
  }
}

// ─── Notification ────────────────────────────────────────────────────────────

/// How long before an event its reminder label says the user wants to be
/// told. Nothing is scheduled from this; it is displayed only.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Display,
  EnumIter,
  Serialize,
  Deserialize,
)]
pub enum Notification {
  #[strum(to_string = "15 minutes")]
  #[serde(rename = "15 minutes")]
  FifteenMinutes,
  #[default]
  #[strum(to_string = "30 minutes")]
  #[serde(rename = "30 minutes")]
  ThirtyMinutes,
  #[strum(to_string = "1 hour")]
  #[serde(rename = "1 hour")]
  OneHour,
  #[strum(to_string = "2 hours")]
  #[serde(rename = "2 hours")]
  TwoHours,
  #[strum(to_string = "1 day")]
  #[serde(rename = "1 day")]
  OneDay,
}

impl Notification {
  pub fn next(self) -> Self { cycle(self, 1) }

  pub fn prev(self) -> Self { cycle(self, -1) }
}

impl FromStr for Notification {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::iter()
      .find(|n| n.to_string() == s.trim())
      .ok_or_else(|| Error::UnknownNotification(s.to_owned()))
  }
}

/// Step `value` by `offset` through the variants of `T`, wrapping at either
/// end.
fn cycle<T>(value: T, offset: isize) -> T
where
  T: IntoEnumIterator + PartialEq + Copy,
{
  let all: Vec<T> = T::iter().collect();
  let len = all.len() as isize;
  let pos = all.iter().position(|v| *v == value).unwrap_or(0) as isize;
  all[(pos + offset).rem_euclid(len) as usize]
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// A single planner entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  /// Assigned by the store on creation; never changes afterwards.
  pub id:           Uuid,
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         EventType,
  pub date:         NaiveDate,
  /// Free-form time of day, e.g. "10:00". Not parsed.
  pub time:         String,
  pub location:     String,
  pub description:  String,
  pub notification: Notification,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn event_type_parses_case_insensitively() {
    assert_eq!("meeting".parse::<EventType>().unwrap(), EventType::Meeting);
    assert_eq!(" Party ".parse::<EventType>().unwrap(), EventType::Party);
    assert_eq!("BUSINESS".parse::<EventType>().unwrap(), EventType::Business);
  }

  #[test]
  fn event_type_rejects_unknown_names() {
    let err = "conference".parse::<EventType>().unwrap_err();
    assert!(matches!(err, Error::UnknownEventType(s) if s == "conference"));
  }

  #[test]
  fn event_type_cycles_in_both_directions() {
    assert_eq!(EventType::Meeting.next(), EventType::Party);
    assert_eq!(EventType::Business.next(), EventType::Meeting);
    assert_eq!(EventType::Meeting.prev(), EventType::Business);
  }

  #[test]
  fn notification_labels_round_trip_through_from_str() {
    for n in Notification::iter() {
      assert_eq!(n.to_string().parse::<Notification>().unwrap(), n);
    }
    assert!("3 weeks".parse::<Notification>().is_err());
  }

  #[test]
  fn notification_defaults_to_thirty_minutes() {
    assert_eq!(Notification::default().to_string(), "30 minutes");
    assert_eq!(Notification::OneDay.next(), Notification::FifteenMinutes);
  }

  #[test]
  fn event_serialises_kind_under_type_key() {
    let event = Event {
      id:           Uuid::nil(),
      title:        "Standup".into(),
      kind:         EventType::Meeting,
      date:         NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
      time:         "10:00".into(),
      location:     String::new(),
      description:  String::new(),
      notification: Notification::OneHour,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "meeting");
    assert_eq!(json["notification"], "1 hour");
    assert_eq!(json["date"], "2025-12-20");
  }
}
