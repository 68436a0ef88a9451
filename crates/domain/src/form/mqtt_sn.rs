//! MQTT-SN form sub-state

use serde::{Deserialize, Serialize};

/// User-editable fields for an MQTT-SN datagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttSnForm {
    /// Gateway host name or address.
    pub gateway: String,
    /// Gateway port as typed.
    pub port: String,
    /// Datagram payload, optionally JSON.
    pub data: String,
}
