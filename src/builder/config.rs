//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Config, StateDefinition};

/// Builder for constructing a [`Config`] with a fluent API.
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateDefinition)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and its transitions.
    pub fn state<F>(mut self, id: impl Into<String>, transitions: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        let definition = transitions(StateBuilder::new()).build();
        self.states.push((id.into(), definition));
        self
    }

    /// Declare a state from a pre-built definition.
    pub fn add_state(mut self, id: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.push((id.into(), definition));
        self
    }

    /// Build the table.
    /// Returns an error if the initial state is missing or a state is declared twice.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut config = Config::new(initial);
        for (id, definition) in self.states {
            if config.contains_state(&id) {
                return Err(BuildError::DuplicateState(id));
            }
            config.states.insert(id, definition);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
