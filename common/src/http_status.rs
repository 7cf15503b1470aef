//! HTTP status code helpers.
//!
//! Classification of a transport outcome never looks at the status code.
//! These helpers exist for callers that layer their own status policy on
//! top of a successful result.

use serde::Serialize;

/// HTTP status code carried by HTTP-kind response metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 1xx informational responses.
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.0)
    }

    /// 2xx success responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 3xx redirections.
    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.0)
    }

    /// 4xx client errors (not retryable).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors (potentially retryable).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Specific codes that indicate transient failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self.0, 502 | 503 | 504 | 429)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
