//! Transport seam.
//!
//! A [`Transport`] performs one call and reports whatever it got back as a
//! [`RawOutcome`]. The network-backed implementation lives in [`reqwest_transport`];
//! tests swap in [`InterceptingTransport`](crate::InterceptingTransport).

pub mod reqwest_transport;

use crate::outcome::RawOutcome;
use crate::request::HttpRequest;

use std::future::Future;

/// Capability to perform a raw call.
///
/// Implementations must always resolve, reporting failures inside the outcome
/// rather than panicking.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> impl Future<Output = RawOutcome> + Send;
}

