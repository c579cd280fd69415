//! Test utilities for the `projgen` crate.
//!
//! Payload builders produce IR fixtures as `serde_json` values so tests can
//! add or remove individual tags, and file helpers place payloads on disk for
//! the command-line tests.

pub mod error;
pub mod payload;

pub use error::display_error_chain;
pub use payload::{PayloadFile, minimal_payload, payload_bytes, sample_project};
