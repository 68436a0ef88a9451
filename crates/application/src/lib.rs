//! Courier Application - Use cases and ports
//!
//! This crate turns form-state snapshots into validated request
//! descriptors and orchestrates their dispatch through the transport
//! executor port. It depends only on `courier-domain`; all I/O lives
//! behind the port trait.

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{DispatchError, DispatchResult};
pub use ports::{TransportError, TransportExecutor};
pub use session::{PendingDispatch, RequestSession};
pub use use_cases::{auto_headers, build, merge_headers};
