//! Builder API for ergonomic transition table construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for writing transition tables in code instead of JSON.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::Config;

/// Create a table where each `(from, event, to)` triple is one transition.
///
/// States are registered in order of first appearance, whether as a source
/// or a target.
///
/// # Example
///
/// ```
/// use retrace::builder::table;
///
/// let config = table("locked", &[
///     ("locked", "coin", "unlocked"),
///     ("unlocked", "push", "locked"),
/// ]);
///
/// assert_eq!(config.target("locked", "coin"), Some("unlocked"));
/// assert_eq!(config.state_ids().count(), 2);
/// ```
pub fn table(initial: &str, transitions: &[(&str, &str, &str)]) -> Config {
    let mut config = Config::new(initial);
    for &(from, event, to) in transitions {
        config
            .states
            .entry(from.to_string())
            .or_default()
            .transitions
            .insert(event.to_string(), to.to_string());
        config.states.entry(to.to_string()).or_default();
    }
    config
}
