//! Caller-facing client boundary.
//!
//! Callers only ever see an [`HttpResult`]; the raw triple stays between the transport
//! and the classifier.

use crate::classifier::HttpResult;
use crate::config::TransportConfig;
use crate::error::config::ConfigError;
use crate::request::HttpRequest;
use crate::transport::Transport;
use crate::transport::reqwest_transport::ReqwestTransport;

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

/// Performs requests and resolves each one to exactly one classified result.
pub trait HttpClient: Send + Sync {
    fn perform(&self, request: HttpRequest) -> impl Future<Output = HttpResult> + Send;
}

/// [`HttpClient`] over an injected [`Transport`].
///
/// Clones share the transport.
pub struct TransportClient<T> {
    transport: Arc<T>,
}

impl<T> Clone for TransportClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl TransportClient<ReqwestTransport> {
    /// Client over the network transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid or the reqwest client
    /// cannot be built from it.
    #[track_caller]
    pub fn from_config(config: &TransportConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> TransportClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport + 'static> TransportClient<T> {
    /// Perform `request` in the background and hand the result to `completion`.
    ///
    /// `completion` runs exactly once, on a runtime worker rather than the calling
    /// task. Must be called from within a tokio runtime.
    pub fn perform_with<F>(&self, request: HttpRequest, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(HttpResult) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.perform(request).await;
            completion(result);
        })
    }
}

impl<T: Transport> HttpClient for TransportClient<T> {
    async fn perform(&self, request: HttpRequest) -> HttpResult {
        self.transport.execute(&request).await.classify()
    }
}
