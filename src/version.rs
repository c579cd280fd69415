//! Semantic versions as carried in the IR.
//!
//! Tool versions are frequently written with fewer than three components
//! (`14`, `13.4`). Missing components are zero-filled before the value is
//! handed to [`semver`], so `13.4` and `13.4.0` compare equal.

use miette::Diagnostic;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a string is not a semantic version.
#[derive(Debug, Error, Diagnostic)]
pub enum VersionError {
    /// More than three dot-separated numeric components were supplied.
    #[error("version `{value}` has more than three components")]
    #[diagnostic(code(projgen::version::too_many_components))]
    TooManyComponents {
        /// The offending version text.
        value: String,
    },
    /// The zero-filled version did not parse.
    #[error("version `{value}` is not a semantic version")]
    #[diagnostic(
        code(projgen::version::invalid),
        help("use `MAJOR[.MINOR[.PATCH]]` with an optional `-pre` or `+build` suffix")
    )]
    Invalid {
        /// The offending version text.
        value: String,
        /// Parser error from `semver`.
        #[source]
        source: semver::Error,
    },
}

/// A semantic version, `MAJOR[.MINOR[.PATCH]][-PRE][+BUILD]`.
///
/// # Examples
///
/// ```
/// use projgen::version::SemanticVersion;
///
/// let version: SemanticVersion = "13.4".parse()?;
/// assert_eq!((version.major(), version.minor(), version.patch()), (13, 4, 0));
/// assert_eq!(version.to_string(), "13.4.0");
/// # Ok::<(), projgen::version::VersionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    /// Build a release version from its numeric components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Major component.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.0.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.0.minor
    }

    /// Patch component.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.0.patch
    }

    /// The underlying [`semver::Version`].
    #[must_use]
    pub const fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (core, suffix) = value
            .find(['-', '+'])
            .map_or((value, ""), |idx| value.split_at(idx));
        let padded = match core.split('.').count() {
            1 => format!("{core}.0.0{suffix}"),
            2 => format!("{core}.0{suffix}"),
            3 => value.to_owned(),
            _ => {
                return Err(VersionError::TooManyComponents {
                    value: value.to_owned(),
                });
            }
        };
        semver::Version::parse(&padded)
            .map(Self)
            .map_err(|source| VersionError::Invalid {
                value: value.to_owned(),
                source,
            })
    }
}

impl From<semver::Version> for SemanticVersion {
    fn from(version: semver::Version) -> Self {
        Self(version)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests use expect for descriptive failures")]
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("14", (14, 0, 0))]
    #[case("13.4", (13, 4, 0))]
    #[case("1.0.0", (1, 0, 0))]
    #[case("15.0.1", (15, 0, 1))]
    fn zero_fills_missing_components(#[case] text: &str, #[case] expected: (u64, u64, u64)) {
        let version: SemanticVersion = text.parse().expect("valid version");
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            expected
        );
    }

    #[test]
    fn keeps_prerelease_and_build_metadata() {
        let version: SemanticVersion = "15.0-beta.2+abc".parse().expect("valid version");
        assert_eq!(version.to_string(), "15.0.0-beta.2+abc");
        assert_eq!(version.as_semver().pre.as_str(), "beta.2");
    }

    #[test]
    fn short_and_full_forms_compare_equal() {
        let short: SemanticVersion = "13.4".parse().expect("short form");
        let full: SemanticVersion = "13.4.0".parse().expect("full form");
        assert_eq!(short, full);
        assert!(SemanticVersion::new(13, 3, 9) < full);
    }

    #[rstest]
    #[case("")]
    #[case("one.two")]
    #[case("1..2")]
    #[case("1.2.x")]
    #[case("-beta")]
    fn rejects_non_numeric_versions(#[case] text: &str) {
        let err = text.parse::<SemanticVersion>().expect_err("invalid version");
        assert!(matches!(err, VersionError::Invalid { .. }));
    }

    #[test]
    fn rejects_four_components() {
        let err = "1.2.3.4".parse::<SemanticVersion>().expect_err("too long");
        assert!(matches!(err, VersionError::TooManyComponents { .. }));
    }

    #[rstest]
    #[case("1.2.3.4", "projgen::version::too_many_components")]
    #[case("1.2.x", "projgen::version::invalid")]
    fn errors_carry_diagnostic_codes(#[case] text: &str, #[case] code: &str) {
        let err = text.parse::<SemanticVersion>().expect_err("invalid version");
        let actual = err.code().map(|c| c.to_string());
        assert_eq!(actual.as_deref(), Some(code));
    }
}
