//! Outcome classification.
//!
//! A transport promises "an error, or data with an HTTP response", but neither real
//! nor substitute transports are held to it. [`classify`] trusts nothing and maps
//! every possible triple onto one of two results:
//!
//! 1. An error is present: failure with that error, whatever else came back.
//! 2. Data and an HTTP-kind response are present: success with both, unchanged.
//! 3. Anything else: failure with `UnexpectedRepresentation`.
//!
//! Only presence and response kind are inspected. Empty bodies count as data and
//! every status code, 4xx and 5xx included, is a success here; status policy belongs
//! to the caller.

use crate::error::http_client::HttpClientError;
use crate::error::transport::TransportError;
use crate::outcome::OutcomeShape;
use crate::response::{HttpResponse, ResponseMetadata};

/// Result delivered for every call: payload plus HTTP response, or a classified error.
pub type HttpResult = Result<(Vec<u8>, HttpResponse), HttpClientError>;

/// Classify one transport outcome.
///
/// Pure and total: no input panics, the same input always yields the same variant.
#[track_caller]
pub fn classify(
    data: Option<Vec<u8>>,
    response: Option<ResponseMetadata>,
    error: Option<TransportError>,
) -> HttpResult {
    if let Some(error) = error {
        return Err(HttpClientError::transport(error));
    }

    match (data, response) {
        (Some(data), Some(ResponseMetadata::Http(response))) => Ok((data, response)),
        (data, response) => Err(HttpClientError::unexpected_representation(
            OutcomeShape::of(data.as_deref(), response.as_ref(), None),
        )),
    }
}
