//! HTTP form sub-state

use serde::{Deserialize, Serialize};

use crate::request::{HttpMethod, KeyValueRows};

/// User-editable fields for an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpForm {
    /// Selected HTTP method.
    pub method: HttpMethod,
    /// Target URL as typed; required non-blank at build time.
    pub url: String,
    /// Header rows; blank-key rows are dropped at build time.
    pub headers: KeyValueRows,
    /// Query parameter rows; blank-key rows are dropped at build time.
    pub query_params: KeyValueRows,
    /// Raw body text, optionally JSON.
    pub body: String,
}

impl Default for HttpForm {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            url: String::new(),
            headers: KeyValueRows::single_blank(),
            query_params: KeyValueRows::single_blank(),
            body: String::new(),
        }
    }
}
