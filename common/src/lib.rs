//! Shared building blocks for the HTTP client workspace.
//!
//! This crate holds the small pieces every other crate leans on:
//!
//! - **ErrorLocation**: call-site capture attached to every error variant
//! - **HttpStatusCode**: status code wrapper with category helpers
//! - **logger**: process-wide `fern` logger initialisation
//!
//! ## Architecture
//!
//! - **common** (this crate): Shared types, no HTTP logic
//! - **http-client**: Request/response model, outcome classification,
//!   transports and the interception harness

pub mod error;
pub mod http_status;
pub mod logger;


pub use error::error_location::ErrorLocation;
pub use error::logger::LoggerError;
pub use http_status::HttpStatusCode;
