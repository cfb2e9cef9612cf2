//! The finite state machine engine.

use crate::core::{Config, History};
use crate::machine::error::{FsmError, UnknownStateReason};
use std::sync::Arc;
use tracing::{debug, trace};

/// A state machine driven by a shared transition table.
///
/// The machine owns a [`History`] of visited states. Transitions append to it,
/// [`undo`](Fsm::undo) and [`redo`](Fsm::redo) walk it, and a new transition
/// after an undo discards the redo tail.
///
/// # Example
///
/// ```rust
/// use retrace::fsm_config;
/// use retrace::machine::Fsm;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle: { start => running },
///         running: { stop => idle, pause => paused },
///         paused: { resume => running },
///     }
/// };
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("start").unwrap();
/// fsm.trigger("pause").unwrap();
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "running");
///
/// fsm.trigger("stop").unwrap();
/// assert_eq!(fsm.state(), "idle");
/// assert!(!fsm.redo());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Arc<Config>,
    history: History,
}

impl Fsm {
    /// Create a machine positioned at `config.initial`.
    ///
    /// The initial state is not checked against the table.
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        let config = config.into();
        let history = History::new(config.initial.clone());
        Self { config, history }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new<C: Into<Arc<Config>>>(config: Option<C>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::InvalidConfig)
    }

    /// Create a machine from a JSON transition table.
    ///
    /// A `null` document is treated as an absent configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Self::try_new(Config::from_json(json)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current state.
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Move to `target`, discarding any redo tail.
    ///
    /// Fails without side effects when `target` is not a registered state.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            debug!(from = %self.state(), to = %target, "rejected transition to unknown state");
            return Err(self.unknown_state(UnknownStateReason::UnregisteredTarget {
                target: target.to_string(),
            }));
        }

        let discarded = self.history.len() - self.history.cursor() - 1;
        let from = self.state().to_string();
        self.history.push(target);
        debug!(
            from = %from,
            to = %target,
            cursor = self.history.cursor(),
            discarded,
            "state changed"
        );
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// An event the current state does not handle fails with the same error
    /// kind as an unregistered target.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(definition) = self.config.state(self.state()) else {
            debug!(state = %self.state(), event, "current state is not registered");
            return Err(self.unknown_state(UnknownStateReason::UnregisteredCurrent {
                event: event.to_string(),
            }));
        };

        let Some(target) = definition.target(event).map(str::to_string) else {
            debug!(state = %self.state(), event, "no transition for event");
            return Err(self.unknown_state(UnknownStateReason::NoTransition {
                event: event.to_string(),
            }));
        };

        self.change_state(&target)
    }

    /// Move the cursor back to the first history entry.
    ///
    /// History is left intact, so [`redo`](Fsm::redo) can replay it.
    pub fn reset(&mut self) {
        self.history.rewind();
        trace!(state = %self.state(), "reset");
    }

    /// States in table order, optionally only those handling `event`.
    ///
    /// `None` and an empty event both list every state.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            None => self.config.state_ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.handles(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Whether the current state declares a transition for `event`.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config
            .state(self.state())
            .is_some_and(|def| def.handles(event))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        trace!(moved, state = %self.state(), "undo");
        moved
    }

    /// Step forward to the next state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        trace!(moved, state = %self.state(), "redo");
        moved
    }

    /// Forget all undo/redo information, keeping the current state.
    pub fn clear_history(&mut self) {
        self.history.collapse();
        trace!(state = %self.state(), "history cleared");
    }

    fn unknown_state(&self, reason: UnknownStateReason) -> FsmError {
        FsmError::UnknownState {
            current: self.state().to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDefinition;

    fn player() -> Config {
        Config::new("idle")
            .with_state("idle", StateDefinition::new().with_transition("start", "running"))
            .with_state(
                "running",
                StateDefinition::new()
                    .with_transition("stop", "idle")
                    .with_transition("pause", "paused"),
            )
            .with_state("paused", StateDefinition::new().with_transition("resume", "running"))
    }

    #[test]
    fn new_machine_starts_at_initial() {
        let fsm = Fsm::new(player());
        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.history().len(), 1);
        assert_eq!(fsm.history().cursor(), 0);
    }

    #[test]
    fn absent_config_is_rejected() {
        let result = Fsm::try_new(None::<Config>);
        assert!(matches!(result, Err(FsmError::InvalidConfig)));
    }

    #[test]
    fn null_json_is_rejected() {
        assert!(matches!(Fsm::from_json("null"), Err(FsmError::InvalidConfig)));
    }

    #[test]
    fn unregistered_initial_is_accepted() {
        let fsm = Fsm::new(Config::new("nowhere"));
        assert_eq!(fsm.state(), "nowhere");
    }

    #[test]
    fn shared_config_is_not_copied() {
        let config = Arc::new(player());
        let a = Fsm::new(Arc::clone(&config));
        let b = Fsm::new(Arc::clone(&config));
        assert!(std::ptr::eq(a.config(), b.config()));
    }

    #[test]
    fn change_state_appends_to_history() {
        let mut fsm = Fsm::new(player());
        fsm.change_state("paused").unwrap();
        assert_eq!(fsm.state(), "paused");
        assert_eq!(fsm.history().entries(), ["idle", "paused"]);
    }

    #[test]
    fn change_state_to_unknown_leaves_machine_untouched() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.undo();
        let before = fsm.history().clone();

        let err = fsm.change_state("flying").unwrap_err();

        assert_eq!(
            err,
            FsmError::UnknownState {
                current: "idle".to_string(),
                reason: UnknownStateReason::UnregisteredTarget {
                    target: "flying".to_string()
                },
            }
        );
        assert_eq!(fsm.history(), &before);
        assert!(fsm.can_redo());
    }

    #[test]
    fn trigger_follows_table() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();
        fsm.trigger("resume").unwrap();
        assert_eq!(fsm.state(), "running");
        assert_eq!(fsm.history().len(), 4);
    }

    #[test]
    fn trigger_without_transition_is_unknown_state() {
        let mut fsm = Fsm::new(player());

        let err = fsm.trigger("pause").unwrap_err();

        assert!(err.is_unknown_state());
        assert!(matches!(
            err,
            FsmError::UnknownState {
                reason: UnknownStateReason::NoTransition { .. },
                ..
            }
        ));
        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn trigger_from_unregistered_state_fails() {
        let mut fsm = Fsm::new(Config::new("ghost").with_state("real", StateDefinition::new()));

        let err = fsm.trigger("go").unwrap_err();

        assert!(matches!(
            err,
            FsmError::UnknownState {
                reason: UnknownStateReason::UnregisteredCurrent { .. },
                ..
            }
        ));
        assert_eq!(fsm.state(), "ghost");
    }

    #[test]
    fn trigger_to_unregistered_target_fails() {
        let config =
            Config::new("a").with_state("a", StateDefinition::new().with_transition("go", "b"));
        let mut fsm = Fsm::new(config);

        let err = fsm.trigger("go").unwrap_err();

        assert_eq!(err.target(), Some("b"));
        assert_eq!(fsm.state(), "a");
    }

    #[test]
    fn trigger_after_undo_discards_redo_branch() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "running");

        fsm.trigger("stop").unwrap();
        assert_eq!(fsm.state(), "idle");
        assert!(!fsm.redo());
        assert_eq!(fsm.history().entries(), ["idle", "running", "idle"]);
    }

    #[test]
    fn undo_redo_walk_history() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        assert!(fsm.undo());
        assert!(fsm.undo());
        assert!(!fsm.undo());
        assert_eq!(fsm.state(), "idle");

        assert!(fsm.redo());
        assert!(fsm.redo());
        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "paused");
    }

    #[test]
    fn reset_returns_to_first_entry() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        fsm.reset();

        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.history().len(), 3);
        assert!(fsm.redo());
        assert_eq!(fsm.state(), "running");
    }

    #[test]
    fn reset_after_clear_uses_collapsed_state() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.clear_history();
        fsm.trigger("pause").unwrap();

        fsm.reset();

        assert_eq!(fsm.state(), "running");
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();
        fsm.undo();

        fsm.clear_history();

        assert_eq!(fsm.state(), "running");
        assert_eq!(fsm.history().len(), 1);
        assert_eq!(fsm.history().cursor(), 0);
        assert!(!fsm.undo());
        assert!(!fsm.redo());
    }

    #[test]
    fn states_lists_all_in_order() {
        let fsm = Fsm::new(player());
        assert_eq!(fsm.states(None), vec!["idle", "running", "paused"]);
        assert_eq!(fsm.states(Some("")), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn states_filters_by_event() {
        let config = Config::new("A")
            .with_state("A", StateDefinition::new().with_transition("go", "B"))
            .with_state("B", StateDefinition::new());
        let fsm = Fsm::new(config);

        assert_eq!(fsm.states(Some("go")), vec!["A"]);
        assert_eq!(fsm.states(None), vec!["A", "B"]);
        assert!(fsm.states(Some("jump")).is_empty());
    }

    #[test]
    fn can_trigger_reflects_current_state() {
        let mut fsm = Fsm::new(player());
        assert!(fsm.can_trigger("start"));
        assert!(!fsm.can_trigger("pause"));

        fsm.trigger("start").unwrap();
        assert!(fsm.can_trigger("pause"));
    }
}
