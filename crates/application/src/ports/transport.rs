//! Transport executor port

use async_trait::async_trait;
use thiserror::Error;

use courier_domain::RequestDescriptor;

/// Opaque failure reported by the transport executor.
///
/// The core never inspects transport failures; they are stringified and
/// forwarded to the display as `{ "error": ... }`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    /// Wraps a stringifiable transport failure.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Port for dispatching a request descriptor over the wire.
///
/// This trait abstracts the actual HTTP/MQTT/MQTT-SN/CoAP client
/// implementation, keeping the application layer free of network I/O.
/// The success value is opaque and passed through for display.
#[async_trait]
pub trait TransportExecutor: Send + Sync {
    /// Dispatches one request descriptor and returns the raw response
    /// value.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not be carried
    /// out; the core forwards it to the display without interpretation.
    async fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> Result<serde_json::Value, TransportError>;
}
