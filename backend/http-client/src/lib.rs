//! Outcome-classifying HTTP client.
//!
//! A transport call can hand back any mix of payload bytes, response metadata and
//! an error. This crate turns that triple into a single [`HttpResult`]: either the
//! data together with an HTTP response, or a classified [`HttpClientError`].
//!
//! - [`classifier`]: the pure decision rules
//! - [`transport`]: the transport seam plus the `reqwest`-backed implementation
//! - [`intercept`]: a deterministic substitute transport for tests
//! - [`client`]: the caller-facing [`HttpClient`] boundary

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod intercept;
pub mod outcome;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod tests;

pub use classifier::{HttpResult, classify};
pub use client::{HttpClient, TransportClient};
pub use config::TransportConfig;
pub use error::config::ConfigError;
pub use error::http_client::HttpClientError;
pub use error::transport::{TransportError, TransportErrorKind};
pub use intercept::{InterceptingTransport, InterceptionGuard, OfflineTransport};
pub use outcome::{OutcomeShape, RawOutcome, ResponseKind};
pub use request::HttpRequest;
pub use response::{GenericResponse, HttpResponse, ResponseMetadata};
pub use transport::Transport;
pub use transport::reqwest_transport::ReqwestTransport;

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_USER_AGENT: &str = const_format::concatcp!(CRATE_NAME, "/", CRATE_VERSION);
