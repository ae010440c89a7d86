//! Transition rejection errors.

use thiserror::Error;

/// Errors returned when a requested transition is rejected.
///
/// Rejection is always a recoverable condition: the machine's current state
/// is left untouched and the caller may retry with a different target.
/// Messages render upper-case from fixed templates so they are deterministic
/// and testable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The target is not in the rule table's entry for the current state.
    #[error("TRANSITION FROM {} TO {} IS NOT ALLOWED", .from.to_uppercase(), .to.to_uppercase())]
    NotAllowed {
        /// Display label of the state the machine was in.
        from: String,
        /// Display label of the rejected target state.
        to: String,
    },

    /// The target falls outside the machine's declared upper bound.
    #[error("STATE {} IS OUT OF RANGE", .target.to_uppercase())]
    OutOfRange {
        /// Display label of the out-of-range target state.
        target: String,
    },
}
