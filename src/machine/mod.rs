//! The FSM engine.
//!
//! [`Fsm`] resolves events against a shared [`Config`](crate::core::Config)
//! and records every successful transition in its history. All operations are
//! synchronous; callers sharing a machine across threads must provide their
//! own locking.
//!
//! # Errors
//!
//! - [`FsmError::InvalidConfig`] when constructing without a configuration
//! - [`FsmError::UnknownState`] for every rejected transition, with an
//!   [`UnknownStateReason`] naming the lookup that failed

mod error;
mod fsm;

pub use error::{FsmError, UnknownStateReason};
pub use fsm::Fsm;
