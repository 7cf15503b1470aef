pub mod config;
pub mod http_client;
pub mod transport;

pub use config::ConfigError;
pub use http_client::HttpClientError;
pub use transport::{TransportError, TransportErrorKind};
