//! Target identifiers and the opaque target entity.
//!
//! The IR addresses every buildable unit by a [`TargetId`]. Identifiers are
//! opaque: the decoder only checks that they are non-empty and free of
//! whitespace and control characters. [`Target`] carries the little this crate
//! knows about a unit; enrichment stages attach targets to a
//! [`Project`](crate::project::Project) after decoding.

use crate::label::BuildLabel;
use miette::Diagnostic;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when validating a [`TargetId`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TargetIdError {
    /// The identifier was the empty string.
    #[error("target identifier is empty")]
    #[diagnostic(code(projgen::target::empty_id))]
    Empty,
    /// The identifier contains whitespace or a control character.
    #[error("target identifier `{id}` contains invalid character {character:?}")]
    #[diagnostic(code(projgen::target::invalid_id_character))]
    InvalidCharacter {
        /// The offending identifier.
        id: String,
        /// The first rejected character.
        character: char,
    },
}

/// Opaque, validated identifier of one buildable unit.
///
/// # Examples
///
/// ```
/// use projgen::target::TargetId;
///
/// let id: TargetId = "//app:App-ios-arm64-min15.0".parse()?;
/// assert_eq!(id.as_str(), "//app:App-ios-arm64-min15.0");
/// assert!("".parse::<TargetId>().is_err());
/// # Ok::<(), projgen::target::TargetIdError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(String);

impl TargetId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TargetIdError`] when `text` is empty or contains whitespace or
    /// control characters.
    pub fn new(text: impl Into<String>) -> Result<Self, TargetIdError> {
        let id = text.into();
        if id.is_empty() {
            return Err(TargetIdError::Empty);
        }
        if let Some(character) = id.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(TargetIdError::InvalidCharacter { id, character });
        }
        Ok(Self(id))
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetId {
    type Err = TargetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A buildable unit attached to a project by an enrichment stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Label of the unit inside the build graph.
    pub label: BuildLabel,
    /// Build configuration the unit was analysed under.
    pub configuration: String,
    /// Product kind, e.g. `com.apple.product-type.application`.
    pub product_type: String,
    /// Units this one depends on directly.
    pub dependencies: BTreeSet<TargetId>,
}

impl Target {
    /// Create a target without dependencies.
    #[must_use]
    pub fn new(
        label: BuildLabel,
        configuration: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            label,
            configuration: configuration.into(),
            product_type: product_type.into(),
            dependencies: BTreeSet::new(),
        }
    }

    /// Add direct dependencies, keeping any already present.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TargetId>) -> Self {
        self.dependencies.extend(dependencies);
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests use expect for descriptive failures")]
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("//app:App")]
    #[case("ios-arm64-min15.0-applebin_ios-ST-2a3b")]
    #[case("é")]
    fn accepts_opaque_identifiers(#[case] text: &str) {
        let id = TargetId::new(text).expect("valid id");
        assert_eq!(id.to_string(), text);
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(TargetId::new(""), Err(TargetIdError::Empty));
    }

    #[rstest]
    #[case("//app:App main", ' ')]
    #[case("a\tb", '\t')]
    #[case("a\u{0}b", '\u{0}')]
    fn rejects_whitespace_and_controls(#[case] text: &str, #[case] character: char) {
        let err = TargetId::new(text).expect_err("invalid id");
        assert_eq!(
            err,
            TargetIdError::InvalidCharacter {
                id: text.to_owned(),
                character,
            }
        );
    }

    #[test]
    fn dependencies_are_deduplicated() {
        let label = "//app:App".parse().expect("label");
        let lib = TargetId::new("lib").expect("id");
        let target = Target::new(label, "Debug", "application")
            .with_dependencies([lib.clone(), lib.clone()]);
        assert_eq!(target.dependencies.len(), 1);
        assert!(target.dependencies.contains(&lib));
    }

    #[rstest]
    #[case("", "projgen::target::empty_id")]
    #[case("a b", "projgen::target::invalid_id_character")]
    fn errors_carry_diagnostic_codes(#[case] text: &str, #[case] code: &str) {
        let err = TargetId::new(text).expect_err("invalid id");
        let actual = err.code().map(|c| c.to_string());
        assert_eq!(actual.as_deref(), Some(code));
    }
}
