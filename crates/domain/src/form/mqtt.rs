//! MQTT form sub-state

use serde::{Deserialize, Serialize};

/// User-editable fields for an MQTT publish.
///
/// `port` is kept as the raw typed string so the form can hold partial
/// input; it is parsed and validated only at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttForm {
    /// Broker host name or address.
    pub broker: String,
    /// Broker port as typed.
    pub port: String,
    /// Topic to publish to.
    pub topic: String,
    /// Quality-of-service level; must be 0, 1 or 2 at build time.
    pub qos: u8,
    /// Message payload, passed through as raw text.
    pub message: String,
}
