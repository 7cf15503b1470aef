//! Response metadata as reported by a transport.
//!
//! The HTTP/non-HTTP split matters: only HTTP-kind metadata, which carries a status
//! code, can ever be part of a successful result.

use common::HttpStatusCode;

use reqwest::header::HeaderMap;
use url::Url;

/// Response metadata of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMetadata {
    Http(HttpResponse),
    Generic(GenericResponse),
}

impl ResponseMetadata {
    pub fn url(&self) -> &Url {
        match self {
            ResponseMetadata::Http(response) => &response.url,
            ResponseMetadata::Generic(response) => &response.url,
        }
    }

    pub fn as_http(&self) -> Option<&HttpResponse> {
        match self {
            ResponseMetadata::Http(response) => Some(response),
            ResponseMetadata::Generic(_) => None,
        }
    }
}

impl From<HttpResponse> for ResponseMetadata {
    fn from(response: HttpResponse) -> Self {
        ResponseMetadata::Http(response)
    }
}

impl From<GenericResponse> for ResponseMetadata {
    fn from(response: GenericResponse) -> Self {
        ResponseMetadata::Generic(response)
    }
}

/// HTTP-kind response metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status: HttpStatusCode,
    pub headers: HeaderMap,
}

impl HttpResponse {
    pub fn new(url: Url, status: impl Into<HttpStatusCode>) -> Self {
        Self {
            url,
            status: status.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Response metadata without a status code, e.g. from a non-HTTP scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericResponse {
    pub url: Url,
    pub mime_type: Option<String>,
    pub expected_content_length: Option<u64>,
}

impl GenericResponse {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            mime_type: None,
            expected_content_length: None,
        }
    }
}
