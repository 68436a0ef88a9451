//! Use cases

mod build_request;
mod headers;

pub use build_request::build;
pub use headers::{auto_headers, merge_headers};
