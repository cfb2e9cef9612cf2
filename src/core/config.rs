//! Declarative transition tables.
//!
//! A [`Config`] names the initial state and maps every state identifier to a
//! [`StateDefinition`], which in turn maps event identifiers to target states.
//! Both maps keep insertion order, so enumerating states yields them in the
//! order the table declared them.

use crate::machine::FsmError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single state.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDefinition;
///
/// let running = StateDefinition::new()
///     .with_transition("stop", "idle")
///     .with_transition("pause", "paused");
///
/// assert_eq!(running.target("pause"), Some("paused"));
/// assert_eq!(running.target("start"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> target state identifier
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    ///
    /// Redefining an event replaces its target but keeps its original position.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state declares a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// A complete transition table.
///
/// The table is read-only once handed to a machine. Targets are not validated
/// up front; an unregistered target only fails when a transition tries to use it.
///
/// # Example
///
/// ```rust
/// use retrace::core::Config;
///
/// let json = r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap().unwrap();
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("idle", "start"), Some("running"));
/// assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in
    pub initial: String,
    /// State identifier -> definition, in declaration order
    pub states: IndexMap<String, StateDefinition>,
}

impl Config {
    /// Create a table with the given initial state and no states registered.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Register a state, returning the updated table.
    pub fn with_state(mut self, id: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    /// Parse a table from JSON.
    ///
    /// A JSON `null` document is an absent configuration and yields `Ok(None)`.
    pub fn from_json(json: &str) -> Result<Option<Self>, FsmError> {
        serde_json::from_str(json).map_err(|e| FsmError::MalformedConfig(e.to_string()))
    }

    /// Serialize the table to JSON.
    pub fn to_json(&self) -> Result<String, FsmError> {
        serde_json::to_string(self).map_err(|e| FsmError::SerializationFailed(e.to_string()))
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    /// Target of `event` from `state`, if both exist.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|def| def.target(event))
    }

    /// All state identifiers in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.keys().map(String::as_str)
    }
}
