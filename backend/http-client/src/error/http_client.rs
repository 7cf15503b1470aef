//! Errors delivered to callers of [`HttpClient`](crate::HttpClient).
//!
//! Exactly two failure shapes exist: the transport reported an error, or the
//! transport returned a combination that is not a valid success.

use crate::error::transport::TransportError;
use crate::outcome::OutcomeShape;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HttpClientError {
    #[error("Transport Error: {source} {location}")]
    Transport {
        source: TransportError,
        location: ErrorLocation,
    },

    #[error("Unexpected Representation Error: {shape} {location}")]
    UnexpectedRepresentation {
        shape: OutcomeShape,
        location: ErrorLocation,
    },
}

impl HttpClientError {
    #[track_caller]
    pub fn transport(source: TransportError) -> Self {
        HttpClientError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_representation(shape: OutcomeShape) -> Self {
        HttpClientError::UnexpectedRepresentation {
            shape,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The transport's own error, if that is what failed the call.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            HttpClientError::Transport { source, .. } => Some(source),
            HttpClientError::UnexpectedRepresentation { .. } => None,
        }
    }

    pub fn is_unexpected_representation(&self) -> bool {
        matches!(self, HttpClientError::UnexpectedRepresentation { .. })
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            HttpClientError::Transport { location, .. } => *location,
            HttpClientError::UnexpectedRepresentation { location, .. } => *location,
        }
    }

    /// Get error category for metrics.
    pub fn error_category(&self) -> &'static str {
        match self {
            HttpClientError::Transport { source, .. } if source.is_timeout() => "timeout",
            HttpClientError::Transport { source, .. } if source.is_connect() => "connection",
            HttpClientError::Transport { .. } => "transport",
            HttpClientError::UnexpectedRepresentation { .. } => "unexpected_representation",
        }
    }
}
