//! Error types for `planner-core`.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;
use uuid::Uuid;

/// A draft field that must be non-blank before the draft can be committed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
  Title,
  Time,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing required field(s): {}", join_fields(.missing))]
  Validation { missing: Vec<RequiredField> },

  #[error("event not found: {0}")]
  NotFound(Uuid),

  #[error("unknown event type: {0:?}")]
  UnknownEventType(String),

  #[error("unknown notification: {0:?}")]
  UnknownNotification(String),
}

fn join_fields(fields: &[RequiredField]) -> String {
  fields
    .iter()
    .map(|f| <&'static str>::from(*f))
    .collect::<Vec<_>>()
    .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
