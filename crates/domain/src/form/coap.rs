//! CoAP form sub-state

use serde::{Deserialize, Serialize};

use crate::request::CoapMethod;

/// User-editable fields for a CoAP request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoapForm {
    /// Selected CoAP method.
    pub method: CoapMethod,
    /// Full URL of the form `coap://host:port/path`, decomposed at
    /// build time.
    pub raw_url: String,
    /// Optional payload, passed through as raw text.
    pub payload: String,
}
