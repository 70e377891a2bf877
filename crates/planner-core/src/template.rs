//! Built-in event templates offered on the Templates tab.

use crate::event::EventType;

/// A named preset that prefills a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
  pub name:        &'static str,
  pub kind:        EventType,
  pub description: &'static str,
}

pub static TEMPLATES: [Template; 3] = [
  Template {
    name:        "Business meeting",
    kind:        EventType::Business,
    description: "A meeting with a client or partner",
  },
  Template {
    name:        "Party",
    kind:        EventType::Party,
    description: "A birthday or a celebration",
  },
  Template {
    name:        "Regular meeting",
    kind:        EventType::Meeting,
    description: "A personal or team meeting",
  },
];
