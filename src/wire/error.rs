//! Errors raised while decoding an IR payload.
//!
//! Every variant aborts the decode; no partially populated project is ever
//! returned. Field names are dotted paths from the root container, with map
//! entries and array elements in brackets: `options.indentWidth`,
//! `envs["//app:App"].HOME`, `extraFiles[2]`.

use super::value::WireValue;
use crate::label::LabelError;
use crate::version::VersionError;
use miette::Diagnostic;
use thiserror::Error;

/// Failure to turn a payload into a [`Project`](crate::project::Project).
#[derive(Debug, Error, Diagnostic)]
pub enum DecodeError {
    /// The bytes are not a well-formed keyed container.
    #[error("IR payload is not valid JSON")]
    #[diagnostic(code(projgen::wire::syntax))]
    Syntax {
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// The payload root is not a keyed container.
    #[error("IR payload must be a keyed container, found {found}")]
    #[diagnostic(code(projgen::wire::not_a_container))]
    NotAContainer {
        /// Rendering of the root value.
        found: String,
    },
    /// A required field's tag is absent.
    #[error("missing required field `{field}`")]
    #[diagnostic(
        code(projgen::wire::missing_field),
        help("the IR may be stale or produced by an incompatible generator; regenerate it")
    )]
    MissingField {
        /// Path of the missing field.
        field: String,
    },
    /// A value has the wrong shape for its field.
    #[error("field `{field}` expected {expected}, found {found}")]
    #[diagnostic(code(projgen::wire::type_mismatch))]
    TypeMismatch {
        /// Path of the offending field.
        field: String,
        /// Semantic type the field requires.
        expected: &'static str,
        /// Rendering of the value that was found.
        found: String,
    },
    /// A keyed collection repeats a key.
    #[error("field `{field}` contains key `{key}` more than once")]
    #[diagnostic(code(projgen::wire::duplicate_key))]
    DuplicateKey {
        /// Path of the collection.
        field: String,
        /// The repeated key.
        key: String,
    },
    /// A build-target label failed its grammar.
    #[error("field `{field}` holds malformed label `{value}`")]
    #[diagnostic(code(projgen::wire::malformed_label))]
    MalformedLabel {
        /// Path of the offending field.
        field: String,
        /// The raw label text.
        value: String,
        /// Grammar violation.
        #[source]
        source: LabelError,
    },
    /// A semantic version failed its grammar.
    #[error("field `{field}` holds malformed version `{value}`")]
    #[diagnostic(code(projgen::wire::malformed_version))]
    MalformedVersion {
        /// Path of the offending field.
        field: String,
        /// The raw version text.
        value: String,
        /// Grammar violation.
        #[source]
        source: VersionError,
    },
    /// A container holds a tag outside the schema while unknown tags are
    /// rejected.
    #[error("`{field}` contains unknown tag `{tag}`")]
    #[diagnostic(
        code(projgen::wire::unknown_field),
        help("decode without strict mode to ignore tags from newer producers")
    )]
    UnknownField {
        /// Path of the container.
        field: String,
        /// The unrecognised tag.
        tag: String,
    },
}

impl DecodeError {
    pub(crate) fn type_mismatch(field: &str, expected: &'static str, found: &WireValue) -> Self {
        Self::TypeMismatch {
            field: field.to_owned(),
            expected,
            found: found.describe(),
        }
    }

    /// Path of the field the error concerns, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Syntax { .. } | Self::NotAContainer { .. } => None,
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::DuplicateKey { field, .. }
            | Self::MalformedLabel { field, .. }
            | Self::MalformedVersion { field, .. }
            | Self::UnknownField { field, .. } => Some(field),
        }
    }
}
