//! Application error types

use thiserror::Error;

use courier_domain::BuildError;

use crate::ports::TransportError;

/// Errors surfaced by a dispatch attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The form snapshot failed validation; nothing was dispatched.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The transport executor rejected the request. Opaque to the core;
    /// forwarded for display, never interpreted.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A dispatch is already in flight for this session.
    #[error("a request is already in flight")]
    Busy,
}

/// Result type alias for dispatch operations.
pub type DispatchResult = Result<serde_json::Value, DispatchError>;
