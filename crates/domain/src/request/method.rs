//! Method enumerations for HTTP and CoAP

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
}

impl HttpMethod {
    /// Returns all available HTTP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete]
    }

    /// Returns whether this method typically carries a request body.
    ///
    /// Drives the automatic `Content-Type` header derivation.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported CoAP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoapMethod {
    /// CoAP GET method
    #[default]
    Get,
    /// CoAP POST method
    Post,
    /// CoAP PUT method
    Put,
    /// CoAP DELETE method
    Delete,
}

impl CoapMethod {
    /// Returns all available CoAP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Get, Self::Post, Self::Put, Self::Delete]
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for CoapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_has_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(CoapMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_all_methods() {
        assert_eq!(HttpMethod::all().len(), 5);
        assert_eq!(CoapMethod::all().len(), 4);
    }
}
