//! Build errors for transition table builders.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),
}
