//! Builder API for ergonomic state machine construction.
//!
//! The builder is the only construction path for [`StateMachine`]: it
//! accumulates configuration (initial state, rule graph, label table,
//! optional bound) and produces one fully-initialized instance without
//! exposing mutable internals.
//!
//! [`StateMachine`]: crate::machine::StateMachine

mod error;
mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
