//! Transition-rule and display-label tables.
//!
//! Both tables are owned by the state machine after construction and treated
//! as read-only thereafter. Taking owned copies (rather than sharing
//! references with the caller) removes the hidden-aliasing hazard of a table
//! mutating underneath a live machine.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Directed rule graph: maps a source state to the states directly reachable
/// from it.
///
/// The graph is not required to be symmetric, acyclic, or total. A state with
/// no outgoing entry is a legitimate terminal state; no transition from it is
/// ever allowed.
///
/// # Example
///
/// ```rust
/// use waypoint::core::TransitionRules;
///
/// let rules: TransitionRules<u8> = [(0, vec![1]), (1, vec![2, 3])].into_iter().collect();
///
/// assert!(rules.allows(&0, &1));
/// assert!(rules.allows(&1, &3));
/// assert!(!rules.allows(&0, &2));
/// assert!(!rules.allows(&3, &0)); // no entry: terminal
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRules<S: State> {
    edges: BTreeMap<S, Vec<S>>,
}

impl<S: State> Default for TransitionRules<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionRules<S> {
    /// Create an empty rule table. A machine over an empty table rejects
    /// every transition.
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Permit a single transition from `from` to `to`.
    pub fn allow(&mut self, from: S, to: S) {
        self.edges.entry(from).or_default().push(to);
    }

    /// Permit transitions from `from` to each state in `targets`.
    pub fn allow_many(&mut self, from: S, targets: impl IntoIterator<Item = S>) {
        self.edges.entry(from).or_default().extend(targets);
    }

    /// Check whether a transition from `from` to `to` is permitted.
    ///
    /// Absence of an entry for `from` means `false`.
    pub fn allows(&self, from: &S, to: &S) -> bool {
        self.edges.get(from).is_some_and(|targets| targets.contains(to))
    }

    /// The states directly reachable from `from`, empty if none.
    pub fn targets(&self, from: &S) -> &[S] {
        self.edges.get(from).map_or(&[], Vec::as_slice)
    }

    /// True when `from` has no outgoing entry: terminal by construction.
    pub fn is_terminal(&self, from: &S) -> bool {
        self.edges.get(from).is_none_or(|targets| targets.is_empty())
    }
}

impl<S: State> FromIterator<(S, Vec<S>)> for TransitionRules<S> {
    fn from_iter<I: IntoIterator<Item = (S, Vec<S>)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (from, targets) in iter {
            rules.allow_many(from, targets);
        }
        rules
    }
}

/// Display labels for states, used only for error formatting and rendering.
///
/// Lookups never fail: an unlabeled state renders as the empty string.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateLabels;
///
/// let labels: StateLabels<u8> = [(0, "Draft"), (1, "Published")].into_iter().collect();
///
/// assert_eq!(labels.get(&0), "Draft");
/// assert_eq!(labels.get(&9), "");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateLabels<S: State> {
    labels: BTreeMap<S, String>,
}

impl<S: State> Default for StateLabels<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateLabels<S> {
    /// Create an empty label table.
    pub fn new() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Assign a label to a state, replacing any previous label.
    pub fn set(&mut self, state: S, label: impl Into<String>) {
        self.labels.insert(state, label.into());
    }

    /// The label for `state`, or `""` when the state has no entry.
    pub fn get(&self, state: &S) -> &str {
        self.labels.get(state).map_or("", String::as_str)
    }
}

impl<S: State, L: Into<String>> FromIterator<(S, L)> for StateLabels<S> {
    fn from_iter<I: IntoIterator<Item = (S, L)>>(iter: I) -> Self {
        let mut labels = Self::new();
        for (state, label) in iter {
            labels.set(state, label);
        }
        labels
    }
}
