use crate::config::TransportConfig;
use crate::error::config::ConfigError;
use crate::error::transport::TransportError;
use crate::outcome::RawOutcome;
use crate::request::HttpRequest;
use crate::response::{HttpResponse, ResponseMetadata};
use crate::transport::Transport;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::{debug, trace};
use reqwest::Client;

/// Network transport backed by a shared [`reqwest::Client`].
///
/// The client pools connections internally, so clones are cheap and share them.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the configuration is invalid, or
    /// [`ConfigError::ClientBuildError`] if reqwest rejects it.
    #[track_caller]
    pub fn new(config: &TransportConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConfigError::ClientBuildError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> RawOutcome {
        trace!("Sending {} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("{} {} failed before a response: {e}", request.method, request.url);
                return RawOutcome::failed(TransportError::from_reqwest(&e));
            }
        };

        let metadata = HttpResponse {
            url: response.url().clone(),
            status: HttpStatusCode(response.status().as_u16()),
            headers: response.headers().clone(),
        };

        debug!(
            "{} {} responded with HTTP {}",
            request.method, request.url, metadata.status
        );

        match response.bytes().await {
            Ok(bytes) => RawOutcome::succeeded(bytes.to_vec(), metadata),
            Err(e) => {
                debug!("Reading body of {} failed: {e}", request.url);
                RawOutcome::new(
                    None,
                    Some(ResponseMetadata::Http(metadata)),
                    Some(TransportError::from_reqwest(&e)),
                )
            }
        }
    }
}
