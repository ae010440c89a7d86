//! Core types shared by the state machine and its builder:
//! - State tokens via the `State` trait
//! - Transition-rule graphs
//! - Display-label tables
//!
//! All logic in this module is pure (no side effects).

mod rules;
mod state;

pub use rules::{StateLabels, TransitionRules};
pub use state::State;
