use http_client::{
    HttpClient, HttpClientError, HttpRequest, InterceptingTransport, ReqwestTransport,
    Transport, TransportClient, TransportConfig, TransportErrorKind,
};

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use url::Url;
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Network transport against a local mock server
// ============================================================================

fn endpoint(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{route}", server.uri())).unwrap()
}

fn client() -> TransportClient<ReqwestTransport> {
    TransportClient::from_config(&TransportConfig::default()).expect("Default config is valid")
}

/// **VALUE**: Verifies that a real HTTP exchange classifies as success with body and status.
///
/// **WHY THIS MATTERS**: This is the production path; the transport must report data and
/// HTTP metadata together so the classifier accepts it.
///
/// **BUG THIS CATCHES**: Would catch the body not being read or headers not being carried.
#[tokio::test]
async fn given_server_returning_body_when_performing_then_succeeds_with_body_and_headers() {
    // GIVEN: A server answering GET /items
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("[1,2,3]", "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Performing the request
    let result = client()
        .perform(HttpRequest::get(endpoint(&server, "/items")))
        .await;

    // THEN: Success with body, status and headers
    let (data, response) = result.expect("Should succeed");
    assert_eq!(data, b"[1,2,3]");
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(
        response.headers.get(CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/json"))
    );
}

/// **VALUE**: Verifies that a 404 is a success at the client layer.
///
/// **WHY THIS MATTERS**: Status policy is the caller's; the client must hand over the
/// response so the caller can read the error body.
///
/// **BUG THIS CATCHES**: Would catch reqwest's `error_for_status` sneaking into the transport.
#[tokio::test]
async fn given_server_returning_404_when_performing_then_succeeds_with_status() {
    let server = MockServer::start().await;
    Mock::given(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let (data, response) = client()
        .perform(HttpRequest::get(endpoint(&server, "/missing")))
        .await
        .expect("404 should still classify as success");

    assert_eq!(data, b"not here");
    assert!(response.status.is_client_error());
}

/// **VALUE**: Verifies that method, headers and body reach the server unchanged.
///
/// **WHY THIS MATTERS**: The request is opaque to this layer and must be passed through.
///
/// **BUG THIS CATCHES**: Would catch dropped headers or bodies in the reqwest mapping.
#[tokio::test]
async fn given_post_with_headers_and_body_when_performing_then_server_receives_them() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("x-trace", "abc"))
        .and(body_bytes(b"payload".to_vec()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::new(Method::POST, endpoint(&server, "/items"))
        .with_header(
            reqwest::header::HeaderName::from_static("x-trace"),
            HeaderValue::from_static("abc"),
        )
        .with_body(b"payload".to_vec());
    let (data, response) = client().perform(request).await.expect("Should succeed");

    assert!(data.is_empty());
    assert_eq!(response.status.as_u16(), 201);
}

/// **VALUE**: Verifies that a refused connection surfaces as a connect transport error.
///
/// **WHY THIS MATTERS**: Callers distinguish "server down" from "server misbehaving".
///
/// **BUG THIS CATCHES**: Would catch reqwest errors being miscategorised.
#[tokio::test]
async fn given_closed_port_when_performing_then_fails_with_connect_error() {
    // GIVEN: A port nothing listens on
    let url = Url::parse("http://127.0.0.1:1/gone").unwrap();

    // WHEN: Performing the request
    let result = client().perform(HttpRequest::get(url)).await;

    // THEN: Transport failure categorised as connect
    match result {
        Err(HttpClientError::Transport { source, .. }) => {
            assert_eq!(source.kind, TransportErrorKind::Connect);
        }
        other => panic!("Expected connect failure, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a server slower than the configured timeout yields a timeout error.
///
/// **WHY THIS MATTERS**: Configured timeouts must actually apply.
///
/// **BUG THIS CATCHES**: Would catch the config not reaching the reqwest builder.
#[tokio::test]
async fn given_slow_server_when_performing_then_fails_with_timeout() {
    let server = MockServer::start().await;
    Mock::given(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(2)))
        .mount(&server)
        .await;
    let config = TransportConfig {
        timeout_ms: 200,
        connect_timeout_ms: 100,
        ..TransportConfig::default()
    };
    let client = TransportClient::from_config(&config).unwrap();

    let error = client
        .perform(HttpRequest::get(endpoint(&server, "/slow")))
        .await
        .expect_err("Should time out");

    assert!(error.transport_error().expect("Transport error").is_timeout());
    assert_eq!(error.error_category(), "timeout");
}

/// **VALUE**: Verifies that the harness restores the network transport once uninstalled.
///
/// **WHY THIS MATTERS**: Uninstall is the teardown half of every harness-based test; after
/// it, requests must flow to the real transport again.
///
/// **BUG THIS CATCHES**: Would catch interception outliving its guard.
#[tokio::test]
async fn given_harness_over_network_when_uninstalled_then_requests_reach_server() {
    // GIVEN: A harness wrapping the network transport, and a server expecting one hit
    let server = MockServer::start().await;
    Mock::given(path("/real"))
        .respond_with(ResponseTemplate::new(200).set_body_string("real"))
        .expect(1)
        .mount(&server)
        .await;
    let network = ReqwestTransport::new(&TransportConfig::default()).unwrap();
    let transport = InterceptingTransport::over(network);
    let client = TransportClient::new(transport.clone());
    let url = endpoint(&server, "/real");

    // WHEN: One call while installed, one after uninstall
    {
        let _guard = transport.install();
        transport.stub(None, None, None);
        let intercepted = client.perform(HttpRequest::get(url.clone())).await;
        assert!(intercepted.unwrap_err().is_unexpected_representation());
    }
    let (data, _) = client
        .perform(HttpRequest::get(url))
        .await
        .expect("Should reach the server");

    // THEN: Only the second call hit the server (wiremock verifies expect(1) on drop)
    assert_eq!(data, b"real");
    assert_eq!(transport.intercepted_calls(), 1);
}

#[tokio::test]
async fn given_transport_used_directly_when_executing_then_reports_raw_triple() {
    let server = MockServer::start().await;
    Mock::given(path("/raw"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let transport = ReqwestTransport::new(&TransportConfig::default()).unwrap();

    let outcome = transport
        .execute(&HttpRequest::get(endpoint(&server, "/raw")))
        .await;

    assert_eq!(outcome.data, Some(Vec::new()));
    assert!(outcome.error.is_none());
    assert_eq!(
        outcome.response.and_then(|r| r.as_http().map(|h| h.status.as_u16())),
        Some(204)
    );
}

#[test]
fn given_invalid_config_when_building_client_then_returns_validation_error() {
    let config = TransportConfig {
        user_agent: String::new(),
        ..TransportConfig::default()
    };

    let result = TransportClient::from_config(&config);

    assert!(matches!(
        result,
        Err(http_client::ConfigError::ValidationError { .. })
    ));
}
