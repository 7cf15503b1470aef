mod intercept;
mod outcome;
mod transport_error;

use crate::error::transport::{TransportError, TransportErrorKind};
use crate::response::{GenericResponse, HttpResponse, ResponseMetadata};

use url::Url;

pub(crate) fn any_url() -> Url {
    Url::parse("http://any-url.com").unwrap()
}

pub(crate) fn any_data() -> Vec<u8> {
    b"any data".to_vec()
}

pub(crate) fn any_error() -> TransportError {
    TransportError::new(TransportErrorKind::Other, "any error")
}

pub(crate) fn http_response(status: u16) -> HttpResponse {
    HttpResponse::new(any_url(), status)
}

pub(crate) fn http_metadata() -> ResponseMetadata {
    ResponseMetadata::Http(http_response(200))
}

pub(crate) fn generic_metadata() -> ResponseMetadata {
    ResponseMetadata::Generic(GenericResponse::new(any_url()))
}
