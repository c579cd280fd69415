//! Decoding and encoding of the compact project IR.
//!
//! The IR is a JSON object whose keys are the short tags listed in
//! [`schema`]. Absent optional tags take the defaults in
//! [`project::defaults`](crate::project::defaults); absent required tags fail
//! with [`DecodeError::MissingField`].
//!
//! # Examples
//!
//! ```
//! use projgen::wire;
//!
//! let payload = br#"{
//!     "n": "App",
//!     "B": "Debug",
//!     "g": "//:generator",
//!     "R": "//:runner",
//!     "m": "1.0.0",
//!     "i": "/usr/bin/index-import",
//!     "o": {"u": true, "i": 4}
//! }"#;
//! let project = wire::decode(payload)?;
//! assert_eq!(project.name(), "App");
//! assert_eq!(project.build_tool_path(), "bazel");
//! assert_eq!(project.options().uses_tabs, Some(true));
//! assert_eq!(project.options().indent_width, Some(4));
//! assert_eq!(project.options().development_region, "en");
//!
//! let bytes = wire::encode(&project)?;
//! assert_eq!(wire::decode(&bytes)?, project);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod decode;
mod encode;
mod error;
pub mod schema;
mod value;

pub use config::{DecoderConfig, UnknownTagPolicy};
pub use error::DecodeError;
pub use value::WireValue;

use crate::project::Project;

/// Decode a payload with the default [`DecoderConfig`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the bytes are not JSON, a required field is
/// missing, or any value fails its type or grammar.
pub fn decode(bytes: &[u8]) -> Result<Project, DecodeError> {
    decode_with(bytes, &DecoderConfig::default())
}

/// Decode a payload with explicit configuration.
///
/// # Errors
///
/// As [`decode`], plus [`DecodeError::UnknownField`] under
/// [`UnknownTagPolicy::Reject`].
pub fn decode_with(bytes: &[u8], config: &DecoderConfig) -> Result<Project, DecodeError> {
    let value: WireValue =
        serde_json::from_slice(bytes).map_err(|source| DecodeError::Syntax { source })?;
    decode_value(&value, config)
}

/// Decode an already parsed value tree.
///
/// # Errors
///
/// As [`decode_with`], except that syntax errors cannot occur.
pub fn decode_value(value: &WireValue, config: &DecoderConfig) -> Result<Project, DecodeError> {
    decode::decode_project(value, config)
}

/// Encode a project as its value tree.
///
/// Targets and custom schemes are not part of the IR and are not encoded.
#[must_use]
pub fn encode_value(project: &Project) -> WireValue {
    encode::encode_project(project)
}

/// Encode a project as compact JSON.
///
/// # Errors
///
/// Returns an error only if the JSON writer fails.
pub fn encode(project: &Project) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&encode_value(project))
}

/// Encode a project as indented JSON.
///
/// # Errors
///
/// Returns an error only if the JSON writer fails.
pub fn encode_pretty(project: &Project) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&encode_value(project))
}
