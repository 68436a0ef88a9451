//! Request descriptor — the normalized, protocol-tagged transport value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::protocol::Protocol;
use crate::request::{CoapMethod, HttpMethod};

/// A validated, canonical request ready for the transport executor.
///
/// Each variant carries only the fields of its own protocol, already
/// normalized: no blank rows, headers merged with auto-header precedence
/// applied, body either re-serialized JSON or the original raw string,
/// CoAP URL decomposed into host and path. The serde representation is
/// the wire contract consumed by the executor, so the tags and field
/// names here must not change. Headers use a `BTreeMap` so serialization
/// is deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol")]
pub enum RequestDescriptor {
    /// HTTP request.
    #[serde(rename = "HTTP")]
    Http {
        /// HTTP method.
        method: HttpMethod,
        /// Final URL with the encoded query string appended.
        url: String,
        /// Merged header map; user headers override auto-headers.
        headers: BTreeMap<String, String>,
        /// Normalized body, absent when the form body was blank.
        body: Option<String>,
    },

    /// MQTT publish.
    #[serde(rename = "MQTT")]
    Mqtt {
        /// Broker host.
        broker: String,
        /// Broker port, always positive.
        port: u16,
        /// Topic to publish to.
        topic: String,
        /// Quality-of-service level, always in {0, 1, 2}.
        qos: u8,
        /// Raw message text.
        message: String,
    },

    /// MQTT-SN datagram.
    #[serde(rename = "MQTT_SN")]
    MqttSn {
        /// Gateway host.
        gateway: String,
        /// Gateway port, always positive.
        port: u16,
        /// Normalized payload, empty when the form data was blank.
        data: String,
    },

    /// CoAP request.
    #[serde(rename = "COAP")]
    Coap {
        /// CoAP method.
        method: CoapMethod,
        /// `host:port` part of the decomposed URL.
        host: String,
        /// Path part of the decomposed URL, `"test"` when absent.
        path: String,
        /// Raw payload, absent when the form payload was blank.
        payload: Option<String>,
    },
}

impl RequestDescriptor {
    /// Returns the protocol tag of this descriptor.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::Http { .. } => Protocol::Http,
            Self::Mqtt { .. } => Protocol::Mqtt,
            Self::MqttSn { .. } => Protocol::MqttSn,
            Self::Coap { .. } => Protocol::Coap,
        }
    }
}
