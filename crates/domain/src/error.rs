//! Domain error types

use thiserror::Error;

/// Validation failures produced while building a request descriptor.
///
/// Every variant maps to a concrete, user-fixable problem in the form;
/// none of them is ever silently defaulted. Malformed JSON in a body or
/// message field is deliberately *not* represented here: it falls back
/// to raw-text passthrough instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The HTTP URL is blank after trimming.
    #[error("URL is required")]
    MissingUrl,

    /// The MQTT broker or topic is blank after trimming.
    #[error("broker and topic are required")]
    MissingBrokerTarget,

    /// The MQTT-SN gateway is blank after trimming.
    #[error("gateway is required")]
    MissingGateway,

    /// The port field does not hold a positive integer.
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    /// The MQTT QoS level is outside {0, 1, 2}.
    #[error("invalid QoS level: {0} (expected 0, 1 or 2)")]
    InvalidQos(u8),

    /// The CoAP URL has a blank host or no `host:port` separator.
    #[error("invalid CoAP URL: {0:?} (expected coap://host:port/path)")]
    InvalidCoapUrl(String),
}

/// Result type alias for descriptor construction.
pub type BuildResult<T> = Result<T, BuildError>;
