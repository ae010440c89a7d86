//! Chain-of-responsibility dispatch:
//! - Query envelopes carrying input, result, and the failure marker
//! - The `Handler` capability trait
//! - The ordered, fail-fast `Broker`

mod dispatch;
mod handler;
mod query;

pub use dispatch::Broker;
pub use handler::Handler;
pub use query::{BoxError, Query};
