//! Filter & selection — deriving the visible subset of events.
//!
//! Everything here is a pure function of its inputs.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::{
  Error,
  event::{Event, EventType},
};

// ─── Type filter ─────────────────────────────────────────────────────────────

/// Which event types are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
  #[default]
  All,
  Only(EventType),
}

impl TypeFilter {
  pub fn matches(self, kind: EventType) -> bool {
    match self {
      Self::All => true,
      Self::Only(wanted) => wanted == kind,
    }
  }

  /// All → Meeting → Party → Business → All.
  pub fn cycle(self) -> Self {
    match self {
      Self::All => Self::Only(EventType::Meeting),
      Self::Only(EventType::Business) => Self::All,
      Self::Only(kind) => Self::Only(kind.next()),
    }
  }
}

impl fmt::Display for TypeFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str("all"),
      Self::Only(kind) => write!(f, "{kind}"),
    }
  }
}

impl FromStr for TypeFilter {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("all") {
      Ok(Self::All)
    } else {
      s.parse::<EventType>().map(Self::Only)
    }
  }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Calendar day match: same year, month, and day.
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
  a.year() == b.year() && a.ordinal() == b.ordinal()
}

/// The events that pass both the date and the type filter, in input order.
///
/// A `None` date keeps events on every day.
pub fn visible_events(
  events: &[Event],
  selected_date: Option<NaiveDate>,
  filter: TypeFilter,
) -> Vec<&Event> {
  events
    .iter()
    .filter(|e| selected_date.is_none_or(|d| same_day(e.date, d)))
    .filter(|e| filter.matches(e.kind))
    .collect()
}

/// Days of `month` in `year` that carry at least one event.
pub fn days_with_events(events: &[Event], year: i32, month: u32) -> BTreeSet<u32> {
  events
    .iter()
    .filter(|e| e.date.year() == year && e.date.month() == month)
    .map(|e| e.date.day())
    .collect()
}
