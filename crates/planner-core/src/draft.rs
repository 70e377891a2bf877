//! Draft — staged form input for creating or editing an event.
//!
//! A draft mirrors [`Event`] without the id and date. The id is assigned by
//! the store and the date comes from the caller's selected day at commit
//! time.

use serde::{Deserialize, Serialize};

use crate::{
  Error, RequiredField, Result,
  event::{Event, EventType, Notification},
  template::Template,
};

/// The free-text fields of a draft, addressable by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
  Title,
  Time,
  Location,
  Description,
}

/// Input to [`crate::store::EventStore::create`] and
/// [`crate::store::EventStore::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         EventType,
  pub time:         String,
  pub location:     String,
  pub description:  String,
  pub notification: Notification,
}

impl Draft {
  /// Prefill a draft with every editable field of `event`.
  pub fn from_event(event: &Event) -> Self {
    Self {
      title:        event.title.clone(),
      kind:         event.kind,
      time:         event.time.clone(),
      location:     event.location.clone(),
      description:  event.description.clone(),
      notification: event.notification,
    }
  }

  /// Start a draft from a template: its type and its name as the title.
  pub fn from_template(template: &Template) -> Self {
    Self {
      title: template.name.to_owned(),
      kind: template.kind,
      ..Self::default()
    }
  }

  pub fn field(&self, field: DraftField) -> &str {
    match field {
      DraftField::Title => &self.title,
      DraftField::Time => &self.time,
      DraftField::Location => &self.location,
      DraftField::Description => &self.description,
    }
  }

  pub fn field_mut(&mut self, field: DraftField) -> &mut String {
    match field {
      DraftField::Title => &mut self.title,
      DraftField::Time => &mut self.time,
      DraftField::Location => &mut self.location,
      DraftField::Description => &mut self.description,
    }
  }

  pub fn cycle_kind(&mut self, forward: bool) {
    self.kind = if forward { self.kind.next() } else { self.kind.prev() };
  }

  pub fn cycle_notification(&mut self, forward: bool) {
    self.notification = if forward {
      self.notification.next()
    } else {
      self.notification.prev()
    };
  }

  /// Check that the title and time are non-blank.
  ///
  /// The error lists every missing field, not just the first.
  pub fn validate(&self) -> Result<()> {
    let missing: Vec<RequiredField> = [
      (RequiredField::Title, &self.title),
      (RequiredField::Time, &self.time),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
      Ok(())
    } else {
      Err(Error::Validation { missing })
    }
  }
}
