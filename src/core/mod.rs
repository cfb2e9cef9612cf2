//! Core data model.
//!
//! This module holds the plain data the engine works on:
//! - Transition tables via [`Config`] and [`StateDefinition`]
//! - The cursor-addressed [`History`] of visited states
//!
//! Nothing here resolves events or enforces table membership; that is the
//! job of the [`machine`](crate::machine) module.

mod config;
mod history;

pub use config::{Config, StateDefinition};
pub use history::{History, HistoryError};
