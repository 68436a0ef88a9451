//! Port definitions (interfaces)
//!
//! Ports define the boundary between the application core and external
//! systems. The transport executor is the only collaborator this core
//! talks to.

mod transport;

pub use transport::{TransportError, TransportExecutor};
