//! State machine that validates transitions against a rule graph.

use crate::core::{State, StateLabels, TransitionRules};
use crate::machine::error::TransitionError;
use std::fmt;

/// A transition-validated state machine.
///
/// Holds one current state and validates every requested move against a
/// caller-supplied rule graph, failing closed on disallowed transitions. The
/// rule and label tables are owned by the machine and read-only after
/// construction; the current state mutates only through [`transition`].
///
/// Construct via [`StateMachineBuilder`](crate::builder::StateMachineBuilder).
///
/// [`transition`]: StateMachine::transition
///
/// # Example
///
/// ```rust
/// use waypoint::builder::StateMachineBuilder;
/// use waypoint::core::{StateLabels, TransitionRules};
///
/// let rules: TransitionRules<u8> = [(0, vec![1]), (1, vec![2])].into_iter().collect();
/// let labels: StateLabels<u8> = [(0, "Draft"), (1, "Review"), (2, "Done")]
///     .into_iter()
///     .collect();
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(0u8)
///     .rules(rules)
///     .labels(labels)
///     .build()
///     .unwrap();
///
/// machine.transition(1).unwrap();
/// assert_eq!(machine.render(), "Review");
///
/// let err = machine.transition(0).unwrap_err();
/// assert_eq!(err.to_string(), "TRANSITION FROM REVIEW TO DRAFT IS NOT ALLOWED");
/// assert_eq!(machine.current(), &1);
/// ```
pub struct StateMachine<S: State> {
    current: S,
    rules: TransitionRules<S>,
    labels: StateLabels<S>,
    bound: Option<S>,
}

impl<S: State> StateMachine<S> {
    pub(crate) fn new(
        current: S,
        rules: TransitionRules<S>,
        labels: StateLabels<S>,
        bound: Option<S>,
    ) -> Self {
        Self {
            current,
            rules,
            labels,
            bound,
        }
    }

    /// The machine's current state.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Display label of the current state, `""` if unlabeled.
    pub fn render(&self) -> &str {
        self.labels.get(&self.current)
    }

    /// True when the rule table has no outgoing entry for the current state.
    pub fn is_terminal(&self) -> bool {
        self.rules.is_terminal(&self.current)
    }

    /// Check whether a move to `target` would be accepted, without mutating.
    pub fn can_transition(&self, target: &S) -> bool {
        self.in_bound(target) && self.rules.allows(&self.current, target)
    }

    /// Request a move to `target`.
    ///
    /// Succeeds iff `target` is within the declared bound (when one is set)
    /// and a member of the rule table's entry for the current state. On
    /// success the current state becomes `target`; on rejection it is left
    /// untouched and the error names both states by their display labels.
    pub fn transition(&mut self, target: S) -> Result<(), TransitionError> {
        if !self.in_bound(&target) {
            return Err(TransitionError::OutOfRange {
                target: self.labels.get(&target).to_string(),
            });
        }
        if !self.rules.allows(&self.current, &target) {
            return Err(TransitionError::NotAllowed {
                from: self.labels.get(&self.current).to_string(),
                to: self.labels.get(&target).to_string(),
            });
        }
        self.current = target;
        Ok(())
    }

    // The bound is an exclusive upper limit; no bound means no range check.
    fn in_bound(&self, target: &S) -> bool {
        self.bound.as_ref().is_none_or(|bound| target < bound)
    }
}

impl<S: State> fmt::Display for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
