use crate::error::transport::{TransportError, TransportErrorKind};
use crate::outcome::RawOutcome;
use crate::request::HttpRequest;
use crate::transport::Transport;

use log::trace;

const OFFLINE_MESSAGE: &str = "offline transport does not reach the network";

/// Transport that fails every call with a connect error without doing any I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn execute(&self, request: &HttpRequest) -> RawOutcome {
        trace!("Offline transport refusing {} {}", request.method, request.url);
        RawOutcome::failed(TransportError::new(
            TransportErrorKind::Connect,
            OFFLINE_MESSAGE,
        ))
    }
}
