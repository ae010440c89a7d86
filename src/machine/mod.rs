//! The transition-validated state engine.

mod engine;
mod error;

pub use engine::StateMachine;
pub use error::TransitionError;
