//! Ordered, fail-fast dispatch over a handler chain.

use super::handler::Handler;
use super::query::Query;
use std::sync::Arc;

/// Chain-of-responsibility dispatch broker.
///
/// Holds an ordered collection of handlers and threads a single mutable
/// [`Query`] through them in subscription order, halting at the first
/// recorded failure. Handlers are stored as `Arc` trait objects; keep a
/// clone of the `Arc` if you intend to unsubscribe it later.
///
/// The broker performs no internal locking: concurrent subscribe,
/// unsubscribe, and fire calls on one instance must be serialized by the
/// caller. Subscriptions must not be mutated from within a handler during a
/// fire pass.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use waypoint::broker::{Broker, Handler, Query};
///
/// struct Double;
///
/// impl Handler<u32, u32> for Double {
///     fn handle(&self, query: &mut Query<u32, u32>) {
///         query.result = query.data * 2;
///     }
/// }
///
/// let mut broker = Broker::new();
/// broker.subscribe(Arc::new(Double));
///
/// let mut query = Query::new(21, 0);
/// broker.fire(&mut query);
/// assert_eq!(query.result, 42);
/// ```
pub struct Broker<D, R> {
    handlers: Vec<Arc<dyn Handler<D, R>>>,
}

impl<D, R> Broker<D, R> {
    /// Create a broker with no subscribed handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the chain.
    ///
    /// No deduplication: a handler subscribed twice runs twice per pass.
    pub fn subscribe(&mut self, handler: Arc<dyn Handler<D, R>>) {
        self.handlers.push(handler);
    }

    /// Remove every subscription with the same identity as `handler`.
    /// No-op if the handler was never subscribed.
    pub fn unsubscribe(&mut self, handler: &Arc<dyn Handler<D, R>>) {
        self.handlers.retain(|h| !Arc::ptr_eq(h, handler));
    }

    /// Walk the chain first-to-last, invoking each handler with the envelope.
    ///
    /// Stops immediately after the first handler that records a failure,
    /// leaving the envelope exactly as that handler last mutated it. If no
    /// handler fails, the result reflects the cumulative effect of every
    /// handler in order. No retries, no recovery: what to do with a surfaced
    /// failure is the caller's decision.
    pub fn fire(&self, query: &mut Query<D, R>) {
        for handler in &self.handlers {
            handler.handle(query);
            if query.is_failed() {
                return;
            }
        }
    }

    /// Number of subscribed handlers, counting duplicates.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are subscribed.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<D, R> Default for Broker<D, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Appends its tag to the result, failing instead when told to.
    struct Tag {
        tag: &'static str,
        fail: bool,
    }

    impl Tag {
        fn new(tag: &'static str) -> Arc<dyn Handler<(), Vec<&'static str>>> {
            Arc::new(Self { tag, fail: false })
        }

        fn failing(tag: &'static str) -> Arc<dyn Handler<(), Vec<&'static str>>> {
            Arc::new(Self { tag, fail: true })
        }
    }

    impl Handler<(), Vec<&'static str>> for Tag {
        fn handle(&self, query: &mut Query<(), Vec<&'static str>>) {
            if self.fail {
                query.fail(format!("FAILED AT {}", self.tag));
            } else {
                query.result.push(self.tag);
            }
        }
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let mut broker = Broker::new();
        broker.subscribe(Tag::new("a"));
        broker.subscribe(Tag::new("b"));
        broker.subscribe(Tag::new("c"));

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);

        assert!(!query.is_failed());
        assert_eq!(query.result, vec!["a", "b", "c"]);
    }

    #[test]
    fn fire_halts_at_first_failure() {
        let mut broker = Broker::new();
        broker.subscribe(Tag::new("a"));
        broker.subscribe(Tag::failing("b"));
        broker.subscribe(Tag::new("c"));

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);

        assert_eq!(query.result, vec!["a"]);
        assert_eq!(query.error.as_ref().unwrap().to_string(), "FAILED AT b");
    }

    #[test]
    fn duplicate_subscription_runs_twice() {
        let handler = Tag::new("x");
        let mut broker = Broker::new();
        broker.subscribe(Arc::clone(&handler));
        broker.subscribe(Arc::clone(&handler));

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);

        assert_eq!(query.result, vec!["x", "x"]);
    }

    #[test]
    fn unsubscribe_removes_every_matching_entry() {
        let repeated = Tag::new("dup");
        let mut broker = Broker::new();
        broker.subscribe(Arc::clone(&repeated));
        broker.subscribe(Tag::new("keep"));
        broker.subscribe(Arc::clone(&repeated));
        assert_eq!(broker.len(), 3);

        broker.unsubscribe(&repeated);
        assert_eq!(broker.len(), 1);

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);
        assert_eq!(query.result, vec!["keep"]);
    }

    #[test]
    fn unsubscribe_of_unknown_handler_is_noop() {
        let never_subscribed = Tag::new("ghost");
        let mut broker = Broker::new();
        broker.subscribe(Tag::new("a"));

        broker.unsubscribe(&never_subscribed);
        assert_eq!(broker.len(), 1);
    }

    #[test]
    fn identical_config_distinct_instances_are_distinct() {
        // Identity is the Arc allocation, not the handler's contents.
        let first = Tag::new("same");
        let second = Tag::new("same");
        let mut broker = Broker::new();
        broker.subscribe(Arc::clone(&first));
        broker.subscribe(Arc::clone(&second));

        broker.unsubscribe(&first);
        assert_eq!(broker.len(), 1);
    }

    #[test]
    fn empty_broker_fire_is_noop() {
        let broker: Broker<(), Vec<&'static str>> = Broker::new();
        assert!(broker.is_empty());

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);

        assert!(query.result.is_empty());
        assert!(!query.is_failed());
    }

    #[test]
    fn handler_after_failure_never_runs() {
        struct Recording {
            ran: Mutex<bool>,
        }

        impl Handler<(), Vec<&'static str>> for Recording {
            fn handle(&self, query: &mut Query<(), Vec<&'static str>>) {
                *self.ran.lock().unwrap() = true;
                query.result.push("late");
            }
        }

        let late = Arc::new(Recording {
            ran: Mutex::new(false),
        });
        let mut broker = Broker::new();
        broker.subscribe(Tag::failing("early"));
        broker.subscribe(Arc::clone(&late) as Arc<dyn Handler<(), Vec<&'static str>>>);

        let mut query = Query::new((), Vec::new());
        broker.fire(&mut query);

        assert!(query.is_failed());
        assert!(!*late.ran.lock().unwrap());
    }
}
