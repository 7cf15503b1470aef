use crate::helpers::{any_request, generic_response, http_response, make_sut};

use http_client::{
    HttpClient, HttpClientError, HttpRequest, ResponseKind, ResponseMetadata, TransportError,
    TransportErrorKind,
};

use std::sync::{Arc, Mutex};

use reqwest::Method;

// ============================================================================
// Public API tests for TransportClient over the interception harness
// Every test installs the harness; the guard uninstalls it on exit or panic.
// ============================================================================

/// **VALUE**: Verifies that a transport error reaches the caller unchanged.
///
/// **WHY THIS MATTERS**: "Connection refused" must surface as exactly that, so callers can
/// tell an unreachable host from a broken response.
///
/// **BUG THIS CATCHES**: Would catch the client swallowing or rewriting transport errors.
#[tokio::test]
async fn given_stubbed_transport_error_when_performing_then_fails_with_that_error() {
    // GIVEN: A stub that only reports an error
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    let error = TransportError::new(TransportErrorKind::Connect, "refused");
    transport.stub(None, None, Some(error.clone()));

    // WHEN: Performing any request
    let result = sut.perform(any_request()).await;

    // THEN: Failure carries the identical error
    match result {
        Err(HttpClientError::Transport { source, .. }) => assert_eq!(source, error),
        other => panic!("Expected failure with {error}, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a call completing with nothing becomes a definite failure.
///
/// **WHY THIS MATTERS**: Callers must never be left without an answer, even when the
/// transport reports nothing at all.
///
/// **BUG THIS CATCHES**: Would catch an empty outcome being turned into a success with
/// default values.
#[tokio::test]
async fn given_stubbed_empty_outcome_when_performing_then_fails_with_unexpected_representation() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    transport.stub(None, None, None);

    let result = sut.perform(any_request()).await;

    let error = result.expect_err("Empty outcome should fail");
    assert!(error.is_unexpected_representation());
}

/// **VALUE**: Verifies the single valid success shape end to end.
///
/// **WHY THIS MATTERS**: This is the happy path every caller depends on.
///
/// **BUG THIS CATCHES**: Would catch the payload or response being lost between transport
/// and caller.
#[tokio::test]
async fn given_stubbed_data_and_http_response_when_performing_then_succeeds() {
    // GIVEN: Payload with an HTTP 200 response
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    let response = http_response(200);
    transport.stub(
        Some(b"payload".to_vec()),
        Some(ResponseMetadata::Http(response.clone())),
        None,
    );

    // WHEN: Performing a request
    let (data, received) = sut
        .perform(any_request())
        .await
        .expect("Should succeed");

    // THEN: Same bytes and response
    assert_eq!(data, b"payload");
    assert_eq!(received, response);
    assert!(received.status.is_success());
}

/// **VALUE**: Verifies that data with non-HTTP metadata fails.
///
/// **WHY THIS MATTERS**: A success result guarantees a status code; generic metadata cannot
/// provide one.
///
/// **BUG THIS CATCHES**: Would catch any response kind being accepted.
#[tokio::test]
async fn given_stubbed_data_and_generic_response_when_performing_then_fails() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    transport.stub(
        Some(b"payload".to_vec()),
        Some(ResponseMetadata::Generic(generic_response())),
        None,
    );

    let error = sut
        .perform(any_request())
        .await
        .expect_err("Generic metadata should fail");

    match error {
        HttpClientError::UnexpectedRepresentation { shape, .. } => {
            assert!(shape.has_data);
            assert_eq!(shape.response, ResponseKind::Generic);
        }
        other => panic!("Expected UnexpectedRepresentation, got {other:?}"),
    }
}

/// **VALUE**: Verifies that an observer sees the request exactly as issued and the call
/// still completes.
///
/// **WHY THIS MATTERS**: Request-shape assertions (method, URL) are how callers test the
/// requests they build. The call must not hang while being observed.
///
/// **BUG THIS CATCHES**: Would catch the request being altered before the transport, or an
/// observed call never finishing.
#[tokio::test]
async fn given_request_observer_when_performing_then_observer_sees_method_and_url() {
    // GIVEN: An observer recording requests
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    let observed: Arc<Mutex<Vec<HttpRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    transport.observe_requests(move |request| {
        sink.lock().unwrap().push(request.clone());
    });

    // WHEN: Performing a GET to example.com
    let request = HttpRequest::get("http://example.com".parse().unwrap());
    let _ = sut.perform(request).await;

    // THEN: Observer saw exactly that request, once
    let observed = observed.lock().unwrap();
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].method, Method::GET);
    assert_eq!(observed[0].url.as_str(), "http://example.com/");
}

/// **VALUE**: Verifies that HTTP error statuses still succeed at the client boundary.
///
/// **WHY THIS MATTERS**: Callers need the body of a 404 or 500 to report the server's
/// message; status policy is theirs to apply.
///
/// **BUG THIS CATCHES**: Would catch status-based failure creeping into the client.
#[tokio::test]
async fn given_stubbed_server_error_status_when_performing_then_succeeds_with_status() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    transport.stub(
        Some(b"{\"error\":\"boom\"}".to_vec()),
        Some(ResponseMetadata::Http(http_response(503))),
        None,
    );

    let (_, response) = sut.perform(any_request()).await.expect("Should succeed");

    assert!(response.status.is_server_error());
    assert!(response.status.is_retryable());
}

/// **VALUE**: Verifies that the client leaves request method and body untouched.
///
/// **WHY THIS MATTERS**: The request is opaque to this layer.
///
/// **BUG THIS CATCHES**: Would catch the client rebuilding the request.
#[tokio::test]
async fn given_post_with_body_when_performing_then_observer_sees_body() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    transport.observe_requests(move |request| {
        *sink.lock().unwrap() = Some(request.clone());
    });

    let request = HttpRequest::new(Method::POST, "http://example.com/items".parse().unwrap())
        .with_body(b"{\"name\":\"x\"}".to_vec());
    let _ = sut.perform(request.clone()).await;

    assert_eq!(observed.lock().unwrap().as_ref(), Some(&request));
}
