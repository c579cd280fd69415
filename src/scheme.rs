//! Scheme-related model types.
//!
//! Schemes themselves are built by an external stage; the IR only carries
//! the policy for generating them automatically.

use crate::target::TargetId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string is not a known [`SchemeAutogenerationMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheme autogeneration mode `{0}`")]
pub struct UnknownSchemeMode(pub String);

/// Which schemes the generator creates without explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeAutogenerationMode {
    /// Create schemes only for targets not covered by a custom scheme.
    Auto,
    /// Create no schemes automatically.
    Disabled,
    /// Create a scheme for every target.
    #[default]
    All,
}

impl SchemeAutogenerationMode {
    /// Wire spelling: `auto`, `none`, or `all`.
    #[must_use]
    pub const fn as_wire_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Disabled => "none",
            Self::All => "all",
        }
    }
}

impl FromStr for SchemeAutogenerationMode {
    type Err = UnknownSchemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "none" => Ok(Self::Disabled),
            "all" => Ok(Self::All),
            other => Err(UnknownSchemeMode(other.to_owned())),
        }
    }
}

impl fmt::Display for SchemeAutogenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// A user-defined scheme attached after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomScheme {
    /// Display name of the scheme.
    pub name: String,
    /// Targets built by the scheme, in build order.
    pub build_targets: Vec<TargetId>,
}

impl CustomScheme {
    /// A scheme that builds nothing yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build_targets: Vec::new(),
        }
    }
}
