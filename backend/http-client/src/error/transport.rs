//! Errors surfaced by a transport itself.
//!
//! Key design decisions:
//! - Owned, `Clone` value so a stub can hand out the same error on every call
//! - Category decided from the source error's predicates, never from its message
//! - No location: the value is propagated unchanged, the wrapping
//!   [`HttpClientError`](crate::HttpClientError) records where it was classified

use std::fmt::{Display, Formatter, Result as FormatResult};

use thiserror::Error as ThisError;

/// Broad category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Request or connect timed out.
    Timeout,
    /// Connection could not be established (refused, DNS, unreachable).
    Connect,
    /// Request failed while being sent.
    Request,
    /// Redirect policy gave up.
    Redirect,
    /// Response body could not be read.
    Body,
    /// Response body could not be decoded.
    Decode,
    /// Request could not be built.
    Builder,
    Other,
}

impl Display for TransportErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let name = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Redirect => "redirect",
            Self::Body => "body",
            Self::Decode => "decode",
            Self::Builder => "builder",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Error value reported by a transport for one call.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Categorise a reqwest error before flattening it to a message.
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        // Timeout first: a connect timeout is reported as both
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_redirect() {
            TransportErrorKind::Redirect
        } else if error.is_body() {
            TransportErrorKind::Body
        } else if error.is_decode() {
            TransportErrorKind::Decode
        } else if error.is_builder() {
            TransportErrorKind::Builder
        } else if error.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };

        Self::new(kind, error.to_string())
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }

    pub fn is_connect(&self) -> bool {
        self.kind == TransportErrorKind::Connect
    }
}
