//! Editable form state, one sub-state per protocol.
//!
//! Only one protocol is active at a time, so the form is a tagged union
//! switched atomically on protocol change rather than four parallel field
//! groups. Switching protocols replaces the whole sub-state with its
//! defaults, which makes the reset policy a total function: body/message
//! text is cleared and header/query tables return to a single blank row
//! without any per-field bookkeeping.

mod coap;
mod http;
mod mqtt;
mod mqtt_sn;

pub use coap::CoapForm;
pub use http::HttpForm;
pub use mqtt::MqttForm;
pub use mqtt_sn::MqttSnForm;

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// The in-progress request form for the active protocol.
///
/// Holds possibly-invalid, user-entered values; nothing is validated at
/// mutation time. Validation happens once, when a descriptor is built
/// from a snapshot of this state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "snake_case")]
pub enum FormState {
    /// HTTP request form.
    Http(HttpForm),
    /// MQTT publish form.
    Mqtt(MqttForm),
    /// MQTT-SN datagram form.
    MqttSn(MqttSnForm),
    /// CoAP request form.
    Coap(CoapForm),
}

impl FormState {
    /// Creates the all-blank default form for `protocol`.
    #[must_use]
    pub fn for_protocol(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Http => Self::Http(HttpForm::default()),
            Protocol::Mqtt => Self::Mqtt(MqttForm::default()),
            Protocol::MqttSn => Self::MqttSn(MqttSnForm::default()),
            Protocol::Coap => Self::Coap(CoapForm::default()),
        }
    }

    /// Returns the protocol this form edits.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::Http(_) => Protocol::Http,
            Self::Mqtt(_) => Protocol::Mqtt,
            Self::MqttSn(_) => Protocol::MqttSn,
            Self::Coap(_) => Protocol::Coap,
        }
    }

    /// Returns the HTTP sub-form, if active.
    #[must_use]
    pub const fn as_http(&self) -> Option<&HttpForm> {
        match self {
            Self::Http(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the HTTP sub-form mutably, if active.
    pub const fn as_http_mut(&mut self) -> Option<&mut HttpForm> {
        match self {
            Self::Http(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the MQTT sub-form, if active.
    #[must_use]
    pub const fn as_mqtt(&self) -> Option<&MqttForm> {
        match self {
            Self::Mqtt(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the MQTT sub-form mutably, if active.
    pub const fn as_mqtt_mut(&mut self) -> Option<&mut MqttForm> {
        match self {
            Self::Mqtt(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the MQTT-SN sub-form, if active.
    #[must_use]
    pub const fn as_mqtt_sn(&self) -> Option<&MqttSnForm> {
        match self {
            Self::MqttSn(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the MQTT-SN sub-form mutably, if active.
    pub const fn as_mqtt_sn_mut(&mut self) -> Option<&mut MqttSnForm> {
        match self {
            Self::MqttSn(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the CoAP sub-form, if active.
    #[must_use]
    pub const fn as_coap(&self) -> Option<&CoapForm> {
        match self {
            Self::Coap(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the CoAP sub-form mutably, if active.
    pub const fn as_coap_mut(&mut self) -> Option<&mut CoapForm> {
        match self {
            Self::Coap(form) => Some(form),
            _ => None,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::Http(HttpForm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_protocol_is_total() {
        for &protocol in Protocol::all() {
            let form = FormState::for_protocol(protocol);
            assert_eq!(form.protocol(), protocol);
        }
    }

    #[test]
    fn test_http_defaults_have_single_blank_rows() {
        let form = FormState::for_protocol(Protocol::Http);
        let http = form.as_http().map(Clone::clone).unwrap_or_default();
        assert_eq!(http.headers.len(), 1);
        assert_eq!(http.query_params.len(), 1);
        assert_eq!(http.headers.present().count(), 0);
        assert!(http.url.is_empty());
        assert!(http.body.is_empty());
    }

    #[test]
    fn test_accessors_reject_other_protocols() {
        let form = FormState::for_protocol(Protocol::Mqtt);
        assert!(form.as_http().is_none());
        assert!(form.as_mqtt().is_some());
        assert!(form.as_coap().is_none());
    }

    #[test]
    fn test_default_is_http() {
        assert_eq!(FormState::default().protocol(), Protocol::Http);
    }
}
