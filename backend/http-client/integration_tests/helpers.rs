//! Shared fixtures for integration tests.

use http_client::{
    GenericResponse, HttpRequest, HttpResponse, InterceptingTransport, OfflineTransport,
    TransportClient,
};

use url::Url;

pub fn any_url() -> Url {
    Url::parse("http://any-url.com").unwrap()
}

pub fn any_request() -> HttpRequest {
    HttpRequest::get(any_url())
}

pub fn http_response(status: u16) -> HttpResponse {
    HttpResponse::new(any_url(), status)
}

pub fn generic_response() -> GenericResponse {
    GenericResponse {
        mime_type: Some("text/plain".to_string()),
        expected_content_length: Some(7),
        ..GenericResponse::new(any_url())
    }
}

/// Client wired to an offline interception harness, plus a handle to configure it.
pub fn make_sut() -> (
    TransportClient<InterceptingTransport<OfflineTransport>>,
    InterceptingTransport<OfflineTransport>,
) {
    let transport = InterceptingTransport::offline();
    (TransportClient::new(transport.clone()), transport)
}
