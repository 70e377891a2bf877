//! Demonstration events a fresh session is seeded with.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::event::{Event, EventType, Notification};

/// Three sample events in December of `year`.
///
/// Returns an empty list if `year` is out of chrono's range.
pub fn sample_events(year: i32) -> Vec<Event> {
  let entries = [
    (
      "Team meeting",
      EventType::Meeting,
      20,
      "10:00",
      "Office, meeting room 2",
      "Quarterly plan review",
      Notification::ThirtyMinutes,
    ),
    (
      "Project presentation",
      EventType::Business,
      22,
      "14:30",
      "Video call",
      "Demo of the results to the client",
      Notification::OneHour,
    ),
    (
      "Anna's birthday",
      EventType::Party,
      25,
      "19:00",
      "Seasons restaurant",
      "Dinner with friends",
      Notification::TwoHours,
    ),
  ];

  entries
    .into_iter()
    .filter_map(|(title, kind, day, time, location, description, notification)| {
      Some(Event {
        id: Uuid::new_v4(),
        title: title.into(),
        kind,
        date: NaiveDate::from_ymd_opt(year, 12, day)?,
        time: time.into(),
        location: location.into(),
        description: description.into(),
        notification,
      })
    })
    .collect()
}
