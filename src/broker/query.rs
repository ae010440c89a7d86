//! The query envelope threaded through a handler chain.

use std::error::Error;

/// Opaque error value a handler may place into the envelope.
///
/// The broker never interprets its content; its mere presence is the stop
/// signal for a fire pass.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Request/result envelope passed by mutable reference through a handler
/// chain.
///
/// All three fields are directly accessible by design: handlers communicate
/// only through this shared record, not through return values. `data` is the
/// input payload and by convention immutable; `result` is incrementally
/// refined by each handler; `error` is the failure marker that halts the
/// chain. Created fresh per dispatch and discarded after `fire` returns.
///
/// # Example
///
/// ```rust
/// use waypoint::broker::Query;
///
/// let mut query: Query<&str, Vec<&str>> = Query::new("input", Vec::new());
/// assert!(!query.is_failed());
///
/// query.fail("NOT ELIGIBLE");
/// assert!(query.is_failed());
/// ```
pub struct Query<D, R> {
    /// Input payload, set by the caller before firing.
    pub data: D,
    /// Result payload, refined by handlers in chain order.
    pub result: R,
    /// Failure marker. A handler that cannot adjudicate the request sets
    /// this instead of panicking or returning early.
    pub error: Option<BoxError>,
}

impl<D, R> Query<D, R> {
    /// Create a fresh envelope with no failure recorded.
    pub fn new(data: D, result: R) -> Self {
        Self {
            data,
            result,
            error: None,
        }
    }

    /// Record a failure, replacing any previous one.
    pub fn fail(&mut self, error: impl Into<BoxError>) {
        self.error = Some(error.into());
    }

    /// True once a failure has been recorded.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
