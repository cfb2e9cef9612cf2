//! Retrace: a declarative finite state machine with navigable history
//!
//! Retrace drives a state machine from a plain transition table and keeps a
//! linear history of every state it visited. The history can be walked with
//! undo and redo; making a new transition after an undo discards the redo
//! branch, the same way an editor's undo buffer behaves.
//!
//! # Core Concepts
//!
//! - **Config**: The transition table, built in code or loaded from JSON
//! - **Fsm**: The engine that resolves events and records transitions
//! - **History**: The cursor-addressed log behind undo, redo and reset
//!
//! # Example
//!
//! ```rust
//! use retrace::{Fsm, FsmError};
//!
//! let json = r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!         "paused": { "transitions": { "resume": "running" } }
//!     }
//! }"#;
//!
//! let mut fsm = Fsm::from_json(json)?;
//! fsm.trigger("start")?;
//! fsm.trigger("pause")?;
//! assert_eq!(fsm.state(), "paused");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "running");
//!
//! assert!(fsm.trigger("start").is_err());
//! assert_eq!(fsm.states(Some("resume")), vec!["paused"]);
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use crate::core::{Config, History, HistoryError, StateDefinition};
pub use machine::{Fsm, FsmError, UnknownStateReason};
