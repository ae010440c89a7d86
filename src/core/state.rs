//! Core `State` trait for workflow state tokens.
//!
//! A state is an opaque comparable token identifying one position in a
//! workflow. The engine never interprets states beyond comparing them and
//! looking them up in caller-supplied tables.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for workflow state tokens.
///
/// Blanket-implemented for every type meeting the bounds, so a plain enum
/// (or a small integer) qualifies with nothing but derives:
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use waypoint::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<TaskState>();
/// assert_state::<u8>();
/// ```
///
/// # Required Traits
///
/// - `Clone`: states are copied into rule tables and the engine's current slot
/// - `Ord`: backs deterministic table storage and the optional upper-bound check
/// - `Hash`: lets callers key their own maps by state
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for persistence
pub trait State:
    Clone + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> State for T where
    T: Clone + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn assert_state<S: State>() {}

    #[test]
    fn derived_enum_satisfies_state() {
        assert_state::<TestState>();
    }

    #[test]
    fn small_integers_satisfy_state() {
        assert_state::<u8>();
        assert_state::<u32>();
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Processing, TestState::Processing);
        assert_ne!(TestState::Initial, TestState::Complete);
        assert!(TestState::Initial < TestState::Complete);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Initial;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
