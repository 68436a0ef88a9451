//! Request session — send orchestration and UI-facing state.
//!
//! One session corresponds to one request editor. It owns the editable
//! form, the active sub-view and the dispatch state, and enforces the
//! send contract: at most one dispatch in flight, busy state cleared on
//! every completion, stale completions dropped.

use tracing::{debug, warn};

use courier_domain::{
    DispatchState, FormState, Pane, Protocol, RequestDescriptor,
};

use crate::error::{DispatchError, DispatchResult};
use crate::ports::{TransportError, TransportExecutor};
use crate::use_cases::build;

/// A pending dispatch handed out by [`RequestSession::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDispatch {
    /// Sequence number to pass back to [`RequestSession::complete`].
    pub seq: u64,
    /// The validated descriptor to hand to the transport executor.
    pub descriptor: RequestDescriptor,
}

/// The state of one in-progress request across its edit/send lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSession {
    form: FormState,
    pane: Pane,
    dispatch: DispatchState,
    next_seq: u64,
}

impl RequestSession {
    /// Creates a session with the all-blank HTTP form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            pane: Pane::default_for(Protocol::Http),
            dispatch: DispatchState::Idle,
            next_seq: 0,
        }
    }

    /// Returns the current form snapshot.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the form for field-by-field mutation by the UI.
    pub const fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Returns the active sub-view.
    #[must_use]
    pub const fn pane(&self) -> Pane {
        self.pane
    }

    /// Selects a sub-view.
    pub const fn set_pane(&mut self, pane: Pane) {
        self.pane = pane;
    }

    /// Returns the dispatch state driving the response panel.
    #[must_use]
    pub const fn dispatch_state(&self) -> &DispatchState {
        &self.dispatch
    }

    /// Switches the active protocol.
    ///
    /// On an actual change this is a total reset: the form is replaced
    /// with the blank defaults of the new protocol (body/message text
    /// gone, header and query tables back to a single blank row), any
    /// prior response is cleared, and the sub-view returns to the
    /// protocol default. Selecting the already-active protocol leaves
    /// the form untouched.
    pub fn switch_protocol(&mut self, protocol: Protocol) {
        if self.form.protocol() == protocol {
            return;
        }
        self.form = FormState::for_protocol(protocol);
        self.pane = Pane::default_for(protocol);
        self.dispatch = DispatchState::Idle;
    }

    /// Validates the form and marks a dispatch as in flight.
    ///
    /// On success the caller must hand the descriptor to the transport
    /// executor and report the outcome via [`Self::complete`] with the
    /// returned sequence number.
    ///
    /// # Errors
    ///
    /// [`DispatchError::Busy`] while another dispatch is in flight (the
    /// display state is left alone); a [`DispatchError::Build`] when
    /// validation fails, in which case the failure is also written to
    /// the display state and nothing is dispatched.
    pub fn begin(&mut self) -> Result<PendingDispatch, DispatchError> {
        if self.dispatch.is_sending() {
            return Err(DispatchError::Busy);
        }

        let descriptor = match build(&self.form) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                self.dispatch = DispatchState::failed(error.to_string());
                return Err(error.into());
            }
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.dispatch = DispatchState::sending(seq);
        debug!(protocol = descriptor.protocol().as_str(), seq, "dispatch started");

        Ok(PendingDispatch { seq, descriptor })
    }

    /// Records the outcome of the dispatch started with `seq`.
    ///
    /// Only the completion matching the in-flight sequence number is
    /// applied; anything else is stale (a newer dispatch started, or
    /// the state was reset by a protocol switch) and is dropped so it
    /// cannot overwrite the newer display. The matching completion
    /// always leaves `Sending`, success or not.
    pub fn complete(&mut self, seq: u64, outcome: Result<serde_json::Value, TransportError>) {
        if self.dispatch.seq() != Some(seq) {
            warn!(seq, "dropping stale dispatch completion");
            return;
        }

        self.dispatch = match outcome {
            Ok(response) => DispatchState::success(response),
            Err(error) => DispatchState::failed(error.to_string()),
        };
    }

    /// Builds the current form and dispatches it through `executor`.
    ///
    /// This is the one suspension point of the send flow; the busy
    /// state is cleared unconditionally when the executor resolves,
    /// success or rejection alike.
    ///
    /// # Errors
    ///
    /// Everything [`Self::begin`] returns, plus
    /// [`DispatchError::Transport`] when the executor rejects.
    pub async fn send<T>(&mut self, executor: &T) -> DispatchResult
    where
        T: TransportExecutor + ?Sized,
    {
        let pending = self.begin()?;
        let outcome = executor.dispatch(&pending.descriptor).await;
        self.complete(pending.seq, outcome.clone());
        outcome.map_err(DispatchError::from)
    }
}

impl Default for RequestSession {
    fn default() -> Self {
        Self::new()
    }
}
