//! Errors raised by the engine.

use std::fmt;
use thiserror::Error;

/// Why a transition was rejected.
///
/// Every rejected transition surfaces as [`FsmError::UnknownState`]; the reason
/// tells callers which lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownStateReason {
    /// The requested target is not registered in the table
    UnregisteredTarget { target: String },

    /// The current state has no transition for the event
    NoTransition { event: String },

    /// The current state is itself not registered, so its transitions cannot be read
    UnregisteredCurrent { event: String },
}

impl fmt::Display for UnknownStateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnregisteredTarget { target } => {
                write!(f, "target '{target}' is not a registered state")
            }
            Self::NoTransition { event } => write!(f, "no transition for event '{event}'"),
            Self::UnregisteredCurrent { event } => write!(
                f,
                "current state is not registered, cannot resolve event '{event}'"
            ),
        }
    }
}

/// Errors that can occur while constructing or driving a machine.
///
/// A failed call never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("No configuration supplied")]
    InvalidConfig,

    #[error("Unknown state from '{current}': {reason}")]
    UnknownState {
        current: String,
        reason: UnknownStateReason,
    },

    /// Configuration document could not be parsed
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),

    /// Configuration could not be written out
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

impl FsmError {
    pub fn is_unknown_state(&self) -> bool {
        matches!(self, Self::UnknownState { .. })
    }

    /// Target the rejected transition asked for, when one was resolved.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::UnknownState {
                reason: UnknownStateReason::UnregisteredTarget { target },
                ..
            } => Some(target),
            _ => None,
        }
    }
}
