//! The raw triple one transport call produces.
//!
//! No consistency is assumed: every field is independent and any combination,
//! including all three absent, is a legal [`RawOutcome`].

use crate::classifier::{HttpResult, classify};
use crate::error::transport::TransportError;
use crate::response::ResponseMetadata;

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Unvalidated outcome of a single transport call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutcome {
    pub data: Option<Vec<u8>>,
    pub response: Option<ResponseMetadata>,
    pub error: Option<TransportError>,
}

impl RawOutcome {
    pub fn new(
        data: Option<Vec<u8>>,
        response: Option<ResponseMetadata>,
        error: Option<TransportError>,
    ) -> Self {
        Self {
            data,
            response,
            error,
        }
    }

    /// Outcome of a call that received a body and response.
    pub fn succeeded(data: impl Into<Vec<u8>>, response: impl Into<ResponseMetadata>) -> Self {
        Self::new(Some(data.into()), Some(response.into()), None)
    }

    /// Outcome of a call that only reported an error.
    pub fn failed(error: TransportError) -> Self {
        Self::new(None, None, Some(error))
    }

    pub fn shape(&self) -> OutcomeShape {
        OutcomeShape::of(
            self.data.as_deref(),
            self.response.as_ref(),
            self.error.as_ref(),
        )
    }

    #[track_caller]
    pub fn classify(self) -> HttpResult {
        classify(self.data, self.response, self.error)
    }
}

/// Kind of response metadata present in an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Absent,
    Http,
    Generic,
}

impl Display for ResponseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            ResponseKind::Absent => f.write_str("absent"),
            ResponseKind::Http => f.write_str("http"),
            ResponseKind::Generic => f.write_str("generic"),
        }
    }
}

/// Presence summary of a [`RawOutcome`], kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeShape {
    pub has_data: bool,
    pub response: ResponseKind,
    pub has_error: bool,
}

impl OutcomeShape {
    pub fn of(
        data: Option<&[u8]>,
        response: Option<&ResponseMetadata>,
        error: Option<&TransportError>,
    ) -> Self {
        let response = match response {
            None => ResponseKind::Absent,
            Some(ResponseMetadata::Http(_)) => ResponseKind::Http,
            Some(ResponseMetadata::Generic(_)) => ResponseKind::Generic,
        };

        Self {
            has_data: data.is_some(),
            response,
            has_error: error.is_some(),
        }
    }
}

impl Display for OutcomeShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let presence = |present: bool| if present { "present" } else { "absent" };
        write!(
            f,
            "data {}, response {}, error {}",
            presence(self.has_data),
            self.response,
            presence(self.has_error)
        )
    }
}
