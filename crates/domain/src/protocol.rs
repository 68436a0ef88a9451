//! Protocol enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wire scheme selected for a request.
///
/// Exactly one protocol is active per request cycle; changing it swaps
/// the active form sub-state (see [`crate::form::FormState`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Plain HTTP request/response.
    #[default]
    Http,
    /// MQTT publish to a broker topic.
    Mqtt,
    /// MQTT for Sensor Networks, datagram to a gateway.
    MqttSn,
    /// Constrained Application Protocol over UDP.
    Coap,
}

impl Protocol {
    /// Returns all selectable protocols, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Http, Self::Mqtt, Self::MqttSn, Self::Coap]
    }

    /// Returns the protocol as a static display string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Mqtt => "MQTT",
            Self::MqttSn => "MQTT-SN",
            Self::Coap => "CoAP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_lists_every_protocol() {
        assert_eq!(Protocol::all().len(), 4);
        assert_eq!(Protocol::all()[0], Protocol::Http);
    }

    #[test]
    fn test_display() {
        assert_eq!(Protocol::Http.to_string(), "HTTP");
        assert_eq!(Protocol::MqttSn.to_string(), "MQTT-SN");
        assert_eq!(Protocol::Coap.to_string(), "CoAP");
    }

    #[test]
    fn test_default_is_http() {
        assert_eq!(Protocol::default(), Protocol::Http);
    }
}
