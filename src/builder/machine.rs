//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateLabels, TransitionRules};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Setters are applied in call order with last-write-wins semantics. Only the
/// initial state is required: a machine built without rules rejects every
/// transition, and one built without labels renders every state as `""`.
/// These are caller contract choices, not build errors.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::StateMachineBuilder;
/// use waypoint::core::TransitionRules;
///
/// let rules: TransitionRules<u8> = [(0, vec![1])].into_iter().collect();
///
/// let machine = StateMachineBuilder::new()
///     .initial(0u8)
///     .rules(rules)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current(), &0);
/// ```
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    rules: Option<TransitionRules<S>>,
    labels: Option<StateLabels<S>>,
    bound: Option<S>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder with every field unset.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: None,
            labels: None,
            bound: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition rule graph. Defaults to an empty graph.
    pub fn rules(mut self, rules: TransitionRules<S>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set the display-label table. Defaults to an empty table.
    pub fn labels(mut self, labels: StateLabels<S>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set an exclusive upper bound on valid target states. Transitions to
    /// states at or above the bound are rejected as out of range. No bound
    /// means no range check.
    pub fn bound(mut self, bound: S) -> Self {
        self.bound = Some(bound);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(StateMachine::new(
            initial,
            self.rules.unwrap_or_default(),
            self.labels.unwrap_or_default(),
            self.bound,
        ))
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
