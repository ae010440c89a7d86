//! Waypoint: generic primitives for controlled state progression and
//! ordered, fail-fast request evaluation.
//!
//! Two independent, peer components, parameterized by the caller's domain
//! types:
//!
//! - **State machine**: holds one current state and validates every requested
//!   transition against a caller-supplied rule graph, failing closed on
//!   disallowed moves.
//! - **Dispatch broker**: holds an ordered handler chain and threads a single
//!   mutable query envelope through it, halting at the first reported
//!   failure.
//!
//! Neither component calls the other; higher-level workflow code composes
//! them. Both are pure, synchronous, and single-threaded per instance:
//! callers serialize access, and neither component logs, blocks, or performs
//! I/O.
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::StateMachineBuilder;
//! use waypoint::core::{StateLabels, TransitionRules};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
//! enum ReviewState {
//!     Open,
//!     Closed,
//! }
//!
//! let rules: TransitionRules<ReviewState> =
//!     [(ReviewState::Open, vec![ReviewState::Closed])].into_iter().collect();
//! let labels: StateLabels<ReviewState> =
//!     [(ReviewState::Open, "Open"), (ReviewState::Closed, "Closed")]
//!         .into_iter()
//!         .collect();
//!
//! let mut review = StateMachineBuilder::new()
//!     .initial(ReviewState::Open)
//!     .rules(rules)
//!     .labels(labels)
//!     .build()
//!     .unwrap();
//!
//! review.transition(ReviewState::Closed).unwrap();
//! assert_eq!(review.render(), "Closed");
//! assert!(review.transition(ReviewState::Open).is_err());
//! ```

pub mod broker;
pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use broker::{BoxError, Broker, Handler, Query};
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{State, StateLabels, TransitionRules};
pub use machine::{StateMachine, TransitionError};
