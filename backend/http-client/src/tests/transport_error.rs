use crate::error::http_client::HttpClientError;
use crate::error::transport::{TransportError, TransportErrorKind};
use crate::outcome::{OutcomeShape, ResponseKind};

/// **VALUE**: Verifies that transport errors display their category and message.
///
/// **WHY THIS MATTERS**: The display string is what ends up in caller logs.
///
/// **BUG THIS CATCHES**: Would catch if either part vanished from the message.
#[test]
fn given_transport_error_when_formatted_then_shows_kind_and_message() {
    let error = TransportError::new(TransportErrorKind::Timeout, "deadline elapsed");

    assert_eq!(error.to_string(), "timeout: deadline elapsed");
    assert!(error.is_timeout());
    assert!(!error.is_connect());
}

/// **VALUE**: Verifies error categories used for metrics.
///
/// **WHY THIS MATTERS**: Dashboards split failures by category; a timeout reported as a
/// generic transport error hides an upstream latency problem.
///
/// **BUG THIS CATCHES**: Would catch guard ordering mistakes in `error_category()`.
#[test]
fn given_client_errors_when_categorized_then_reflect_cause() {
    let timeout = HttpClientError::transport(TransportError::new(TransportErrorKind::Timeout, "t"));
    let connect = HttpClientError::transport(TransportError::new(TransportErrorKind::Connect, "c"));
    let body = HttpClientError::transport(TransportError::new(TransportErrorKind::Body, "b"));
    let unexpected = HttpClientError::unexpected_representation(OutcomeShape {
        has_data: false,
        response: ResponseKind::Absent,
        has_error: false,
    });

    assert_eq!(timeout.error_category(), "timeout");
    assert_eq!(connect.error_category(), "connection");
    assert_eq!(body.error_category(), "transport");
    assert_eq!(unexpected.error_category(), "unexpected_representation");
    assert!(unexpected.transport_error().is_none());
}

/// **VALUE**: Verifies that the client error keeps the transport error as its source.
///
/// **WHY THIS MATTERS**: Error-reporting code walks `source()` chains.
///
/// **BUG THIS CATCHES**: Would catch if the `source` attribute were lost.
#[test]
fn given_transport_failure_when_walking_source_then_finds_transport_error() {
    use std::error::Error;

    let error = HttpClientError::transport(TransportError::new(
        TransportErrorKind::Connect,
        "refused",
    ));

    let source = error.source().expect("Should expose source");
    assert_eq!(source.to_string(), "connect: refused");
}
