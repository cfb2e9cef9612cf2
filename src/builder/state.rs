//! Builder for a single state's transitions.

use crate::core::StateDefinition;

/// Collects the outgoing transitions of one state.
///
/// Handed to the closure passed to
/// [`ConfigBuilder::state`](crate::builder::ConfigBuilder::state).
#[derive(Debug, Default)]
pub struct StateBuilder {
    definition: StateDefinition,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `target` when `event` fires.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.definition = self.definition.with_transition(event, target);
        self
    }

    pub fn build(self) -> StateDefinition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_has_no_transitions() {
        assert!(StateBuilder::new().build().transitions.is_empty());
    }

    #[test]
    fn on_keeps_declaration_order() {
        let definition = StateBuilder::new()
            .on("stop", "idle")
            .on("pause", "paused")
            .build();

        let events: Vec<_> = definition.transitions.keys().map(String::as_str).collect();
        assert_eq!(events, vec!["stop", "pause"]);
        assert_eq!(definition.target("pause"), Some("paused"));
    }
}
