//! Core types and trait definitions for the planner.
//!
//! This crate is deliberately free of terminal and storage dependencies.
//! The store backend and the TUI depend on it; it depends on nothing of
//! theirs.

pub mod draft;
pub mod error;
pub mod event;
pub mod filter;
pub mod sample;
pub mod store;
pub mod template;

pub use error::{Error, RequiredField, Result};
