//! [`MemoryStore`] — the in-memory implementation of [`EventStore`].

use chrono::{Local, NaiveDate};
use planner_core::{
  Error, Result,
  draft::Draft,
  event::Event,
  store::EventStore,
};
use uuid::Uuid;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An ordered collection of events held in memory.
#[derive(Debug, Clone)]
pub struct MemoryStore {
  events: Vec<Event>,
  /// Source of "today" for events created without a selected date.
  today:  fn() -> NaiveDate,
}

fn local_today() -> NaiveDate { Local::now().date_naive() }

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self {
      events: Vec::new(),
      today:  local_today,
    }
  }

  /// A store seeded with `events`, in the given order.
  ///
  /// Later duplicates of an id already seen are dropped so the collection
  /// starts with unique ids.
  pub fn with_events(events: Vec<Event>) -> Self {
    let mut store = Self::new();
    for event in events {
      if store.position(event.id).is_some() {
        tracing::warn!(id = %event.id, "dropping seed event with duplicate id");
        continue;
      }
      store.events.push(event);
    }
    store
  }

  /// Replace the clock used when no date is selected.
  pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
    self.today = today;
    self
  }

  pub fn len(&self) -> usize { self.events.len() }

  pub fn is_empty(&self) -> bool { self.events.is_empty() }

  fn position(&self, id: Uuid) -> Option<usize> {
    self.events.iter().position(|e| e.id == id)
  }

  /// Draw ids until one is not already present.
  fn fresh_id(&self) -> Uuid {
    loop {
      let id = Uuid::new_v4();
      if self.position(id).is_none() {
        return id;
      }
    }
  }
}

// ─── EventStore impl ─────────────────────────────────────────────────────────

impl EventStore for MemoryStore {
  type Error = Error;

  fn create(
    &mut self,
    draft: &Draft,
    selected_date: Option<NaiveDate>,
  ) -> Result<Event> {
    draft.validate()?;

    let event = Event {
      id:           self.fresh_id(),
      title:        draft.title.clone(),
      kind:         draft.kind,
      date:         selected_date.unwrap_or_else(self.today),
      time:         draft.time.clone(),
      location:     draft.location.clone(),
      description:  draft.description.clone(),
      notification: draft.notification,
    };
    self.events.push(event.clone());

    tracing::debug!(id = %event.id, date = %event.date, "created event");
    Ok(event)
  }

  fn update(
    &mut self,
    id: Uuid,
    draft: &Draft,
    selected_date: Option<NaiveDate>,
  ) -> Result<Event> {
    let pos = self.position(id).ok_or(Error::NotFound(id))?;
    draft.validate()?;

    let slot = &mut self.events[pos];
    *slot = Event {
      id,
      title: draft.title.clone(),
      kind: draft.kind,
      date: selected_date.unwrap_or(slot.date),
      time: draft.time.clone(),
      location: draft.location.clone(),
      description: draft.description.clone(),
      notification: draft.notification,
    };

    tracing::debug!(%id, date = %slot.date, "updated event");
    Ok(slot.clone())
  }

  fn delete(&mut self, id: Uuid) -> Result<Event> {
    let pos = self.position(id).ok_or(Error::NotFound(id))?;
    let removed = self.events.remove(pos);

    tracing::debug!(%id, "deleted event");
    Ok(removed)
  }

  fn list(&self) -> &[Event] { &self.events }
}
