//! Handler capability implemented by chain participants.

use super::query::Query;

/// A single unit of request-processing capability.
///
/// Given a mutable envelope, a handler inspects and/or mutates it. A handler
/// that cannot adjudicate the request signals "the whole chain should stop"
/// solely by setting the envelope's failure marker; it should avoid further
/// mutating the result payload after doing so.
///
/// # Example
///
/// ```rust
/// use waypoint::broker::{Handler, Query};
///
/// struct RequireNonEmpty;
///
/// impl Handler<Vec<String>, usize> for RequireNonEmpty {
///     fn handle(&self, query: &mut Query<Vec<String>, usize>) {
///         if query.data.is_empty() {
///             query.fail("EMPTY INPUT");
///         } else {
///             query.result = query.data.len();
///         }
///     }
/// }
/// ```
pub trait Handler<D, R>: Send + Sync {
    /// Process the envelope, recording any failure into it.
    fn handle(&self, query: &mut Query<D, R>);
}
