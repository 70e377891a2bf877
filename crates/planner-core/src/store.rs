//! The `EventStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `planner-store-memory`). The TUI depends on this abstraction for its
//! mutations rather than on the collection itself.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{draft::Draft, event::Event};

/// Abstraction over the authoritative, ordered collection of events.
///
/// Accessed by a single logical actor; every call completes immediately and
/// either fully applies or leaves the collection untouched.
pub trait EventStore {
  type Error: std::error::Error + 'static;

  /// Validate `draft` and append a new event built from it.
  ///
  /// The new event's date is `selected_date`, or today if `None`. Fails
  /// without mutating anything if the title or time is blank.
  fn create(
    &mut self,
    draft: &Draft,
    selected_date: Option<NaiveDate>,
  ) -> Result<Event, Self::Error>;

  /// Replace every field except the id of the event `id` with `draft`.
  ///
  /// The date becomes `selected_date` if given and is otherwise kept. The
  /// event keeps its position in the listing. Fails if `id` is absent or
  /// the draft does not validate.
  fn update(
    &mut self,
    id: Uuid,
    draft: &Draft,
    selected_date: Option<NaiveDate>,
  ) -> Result<Event, Self::Error>;

  /// Remove the event `id` and return it. Survivors keep their order.
  ///
  /// Deleting an id that is not present (including one already deleted) is
  /// an error, not a no-op.
  fn delete(&mut self, id: Uuid) -> Result<Event, Self::Error>;

  /// All events in insertion order.
  fn list(&self) -> &[Event];

  /// Look up a single event. Returns `None` if not found.
  fn get(&self, id: Uuid) -> Option<&Event> {
    self.list().iter().find(|e| e.id == id)
  }
}
