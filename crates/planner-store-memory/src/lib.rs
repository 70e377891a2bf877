//! In-memory backend for the planner event store.
//!
//! The collection lives for as long as the [`MemoryStore`] value does; there
//! is nothing on disk.

mod store;

pub use planner_core::{Error, Result};
pub use store::MemoryStore;
