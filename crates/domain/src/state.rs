//! Dispatch state and sub-view selection for UI binding.
//!
//! This module defines the state machine for request dispatch, enabling
//! the UI to display appropriate feedback at each stage.

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// The form sub-view currently shown below the request bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    /// Query parameter table.
    #[default]
    Parameters,
    /// Header table.
    Headers,
    /// Body / message editor.
    Body,
}

impl Pane {
    /// Returns the default sub-view for `protocol`.
    ///
    /// HTTP opens on the parameter table; every other protocol has no
    /// parameter table and opens on the body editor.
    #[must_use]
    pub const fn default_for(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Http => Self::Parameters,
            Protocol::Mqtt | Protocol::MqttSn | Protocol::Coap => Self::Body,
        }
    }
}

/// Represents the current state of a dispatch in the UI.
///
/// The three display values of the response panel are mutually
/// exclusive and all derive from this state:
/// - `Idle`: nothing sent yet, show the placeholder
/// - `Sending`: dispatch in flight, show the busy indicator
/// - `Success`: show the pretty-printed response value
/// - `Failed`: show the constructed `{ "error": ... }` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DispatchState {
    /// No dispatch has happened yet, or the state was reset.
    #[default]
    Idle,

    /// A dispatch is in flight.
    Sending {
        /// Sequence number of the in-flight dispatch. Completions are
        /// matched against it so a stale resolution cannot overwrite a
        /// newer one.
        seq: u64,
    },

    /// The transport executor returned a success value.
    Success {
        /// Opaque response value, passed through for display.
        response: serde_json::Value,
    },

    /// Validation failed or the transport executor rejected.
    Failed {
        /// Stringified error, shown as `{ "error": ... }`.
        error: String,
    },
}

impl DispatchState {
    /// Creates a Sending state for the dispatch with `seq`.
    #[must_use]
    pub const fn sending(seq: u64) -> Self {
        Self::Sending { seq }
    }

    /// Creates a Success state from an opaque response value.
    #[must_use]
    pub const fn success(response: serde_json::Value) -> Self {
        Self::Success { response }
    }

    /// Creates a Failed state from a stringified error.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Returns true if no dispatch has happened yet.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a dispatch is in flight.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }

    /// Returns true if the last dispatch succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if the last dispatch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the sequence number of the in-flight dispatch, if any.
    #[must_use]
    pub const fn seq(&self) -> Option<u64> {
        match self {
            Self::Sending { seq } => Some(*seq),
            _ => None,
        }
    }

    /// Returns the response value if the last dispatch succeeded.
    #[must_use]
    pub const fn response(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { response } => Some(response),
            _ => None,
        }
    }

    /// Renders the response panel text for this state.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Idle => "No response yet".to_string(),
            Self::Sending { .. } => "Sending...".to_string(),
            Self::Success { response } => pretty(response),
            Self::Failed { error } => pretty(&serde_json::json!({ "error": error })),
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    // Value::to_string is the infallible compact fallback.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_pane_per_protocol() {
        assert_eq!(Pane::default_for(Protocol::Http), Pane::Parameters);
        assert_eq!(Pane::default_for(Protocol::Mqtt), Pane::Body);
        assert_eq!(Pane::default_for(Protocol::MqttSn), Pane::Body);
        assert_eq!(Pane::default_for(Protocol::Coap), Pane::Body);
    }

    #[test]
    fn test_state_predicates() {
        assert!(DispatchState::Idle.is_idle());
        assert!(DispatchState::sending(3).is_sending());
        assert!(DispatchState::success(serde_json::json!({"ok": true})).is_success());
        assert!(DispatchState::failed("boom").is_failed());
    }

    #[test]
    fn test_seq_only_while_sending() {
        assert_eq!(DispatchState::sending(7).seq(), Some(7));
        assert_eq!(DispatchState::Idle.seq(), None);
        assert_eq!(DispatchState::failed("x").seq(), None);
    }

    #[test]
    fn test_display_text_states() {
        assert_eq!(DispatchState::Idle.display_text(), "No response yet");
        assert_eq!(DispatchState::sending(0).display_text(), "Sending...");

        let success = DispatchState::success(serde_json::json!({"status": 200}));
        assert!(success.display_text().contains("\"status\": 200"));

        let failed = DispatchState::failed("connection refused");
        let text = failed.display_text();
        assert!(text.contains("\"error\""));
        assert!(text.contains("connection refused"));
    }
}
