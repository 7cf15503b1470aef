use http_client::{
    HttpClientError, OutcomeShape, ResponseKind, TransportError, TransportErrorKind,
};

/// **VALUE**: Verifies that transport failures include error type, cause and location.
///
/// **WHY THIS MATTERS**: When a request fails in production, the message is often all a
/// developer has. It must say what failed and where it was classified.
///
/// **BUG THIS CATCHES**: Would catch if someone:
/// - Removes the `location` field from HttpClientError
/// - Breaks the Display implementation to not include the transport error
/// - Removes `#[track_caller]` from the constructor
#[test]
fn given_transport_error_when_formatted_then_includes_cause_and_location() {
    // GIVEN: A transport failure constructed here
    let err = HttpClientError::transport(TransportError::new(
        TransportErrorKind::Connect,
        "connection refused",
    ));

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, cause and this file
    assert!(error_string.contains("Transport Error"));
    assert!(error_string.contains("connect: connection refused"));
    assert!(error_string.contains("client_error.rs"));
}

/// **VALUE**: Verifies that unexpected-representation failures describe the offending shape.
///
/// **WHY THIS MATTERS**: "All absent" and "non-HTTP response" share one variant; the shape in
/// the message is the only way to tell them apart in logs.
///
/// **BUG THIS CATCHES**: Would catch the shape being dropped from the display string.
#[test]
fn given_unexpected_representation_when_formatted_then_includes_shape() {
    let err = HttpClientError::unexpected_representation(OutcomeShape {
        has_data: true,
        response: ResponseKind::Generic,
        has_error: false,
    });

    let error_string = err.to_string();

    assert!(error_string.contains("Unexpected Representation Error"));
    assert!(error_string.contains("response generic"));
    assert!(error_string.contains("client_error.rs"));
}
