//! Header map derivation and merging.
//!
//! The header set of an HTTP descriptor is the result of a two-map
//! merge with defined precedence: an auto-header map derived from the
//! method, overlaid by the user's header rows. The merge is a plain
//! function so the precedence rule is testable without any UI.

use std::collections::BTreeMap;

use courier_domain::{HttpMethod, KeyValueRows};

/// Derives the automatic header map for `method`.
///
/// Methods that carry a body (POST, PUT, PATCH) get
/// `Content-Type: application/json`; all others get an empty map.
#[must_use]
pub fn auto_headers(method: HttpMethod) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if method.has_body() {
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
    }
    headers
}

/// Overlays the user's header rows onto an auto-header map.
///
/// Rows with a blank key are dropped; keys are trimmed, values taken
/// verbatim. A user row whose trimmed key collides with an auto-header
/// replaces it, and among user rows the last writer wins.
#[must_use]
pub fn merge_headers(
    auto: BTreeMap<String, String>,
    user: &KeyValueRows,
) -> BTreeMap<String, String> {
    let mut merged = auto;
    for row in user.present() {
        merged.insert(row.key.trim().to_string(), row.value.clone());
    }
    merged
}
