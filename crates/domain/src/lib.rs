//! Courier Domain - Core business types
//!
//! This crate defines the domain model for the Courier multi-protocol
//! API client. All types here are pure Rust with no I/O dependencies.

pub mod descriptor;
pub mod error;
pub mod form;
pub mod protocol;
pub mod request;
pub mod state;

pub use descriptor::RequestDescriptor;
pub use error::{BuildError, BuildResult};
pub use form::{CoapForm, FormState, HttpForm, MqttForm, MqttSnForm};
pub use protocol::Protocol;
pub use request::{CoapMethod, HttpMethod, KeyValueRow, KeyValueRows};
pub use state::{DispatchState, Pane};
