//! Build-target labels.
//!
//! A label names one addressable unit inside the build system's namespace:
//!
//! ```text
//! [@repository]//package[:name]
//! ```
//!
//! The repository prefix is optional and an omitted name defaults to the last
//! component of the package path, so `//app/core` is shorthand for
//! `//app/core:core`.
//!
//! # Examples
//!
//! ```
//! use projgen::label::BuildLabel;
//!
//! let label: BuildLabel = "@rules_xcodeproj//tools/generator".parse()?;
//! assert_eq!(label.repository(), "rules_xcodeproj");
//! assert_eq!(label.package(), "tools/generator");
//! assert_eq!(label.name(), "generator");
//! assert_eq!(label.to_string(), "@rules_xcodeproj//tools/generator:generator");
//! # Ok::<(), projgen::label::LabelError>(())
//! ```

use miette::Diagnostic;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a string does not follow the label grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LabelError {
    /// The label does not contain the `//` package separator.
    #[error("label `{label}` is missing the `//` package separator")]
    #[diagnostic(
        code(projgen::label::missing_package_separator),
        help("labels have the form `[@repo]//package[:name]`")
    )]
    MissingPackageSeparator {
        /// The offending label text.
        label: String,
    },
    /// The repository name contains a character outside `[A-Za-z0-9_.~+-]`.
    #[error("label `{label}` has an invalid repository name `{repository}`")]
    #[diagnostic(code(projgen::label::invalid_repository))]
    InvalidRepository {
        /// The offending label text.
        label: String,
        /// The repository portion that failed validation.
        repository: String,
    },
    /// The package path is malformed.
    #[error("label `{label}` has an invalid package path `{package}`")]
    #[diagnostic(code(projgen::label::invalid_package))]
    InvalidPackage {
        /// The offending label text.
        label: String,
        /// The package portion that failed validation.
        package: String,
    },
    /// The target name is empty or contains forbidden characters.
    #[error("label `{label}` has an invalid target name `{name}`")]
    #[diagnostic(code(projgen::label::invalid_name))]
    InvalidName {
        /// The offending label text.
        label: String,
        /// The name portion that failed validation.
        name: String,
    },
    /// The label has neither an explicit name nor a package to derive one from.
    #[error("label `{label}` does not name a target")]
    #[diagnostic(
        code(projgen::label::missing_name),
        help("a label for the root package needs an explicit `:name`")
    )]
    MissingName {
        /// The offending label text.
        label: String,
    },
}

/// A validated build-target label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildLabel {
    repository: String,
    package: String,
    name: String,
}

impl BuildLabel {
    /// Repository name without the leading `@`; empty for the main repository.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Package path relative to the repository root; empty for the root
    /// package.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Target name within the package.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_repository_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '~' | '+' | '-')
}

fn is_label_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

fn valid_repository(repository: &str) -> bool {
    // `@@repo` spells a canonical repository name.
    let bare = repository.strip_prefix('@').unwrap_or(repository);
    bare.chars().all(is_repository_char)
}

fn valid_package(package: &str) -> bool {
    package.is_empty()
        || package
            .split('/')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_label_char))
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_label_char) && !name.contains(':')
}

impl FromStr for BuildLabel {
    type Err = LabelError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let missing_separator = || LabelError::MissingPackageSeparator {
            label: label.to_owned(),
        };
        let (repository, rest) = match label.strip_prefix('@') {
            Some(qualified) => qualified.split_once("//").ok_or_else(missing_separator)?,
            None => ("", label.strip_prefix("//").ok_or_else(missing_separator)?),
        };
        if !valid_repository(repository) {
            return Err(LabelError::InvalidRepository {
                label: label.to_owned(),
                repository: repository.to_owned(),
            });
        }

        let (package, explicit_name) = match rest.split_once(':') {
            Some((package, name)) => (package, Some(name)),
            None => (rest, None),
        };
        if !valid_package(package) {
            return Err(LabelError::InvalidPackage {
                label: label.to_owned(),
                package: package.to_owned(),
            });
        }

        let name = match explicit_name {
            Some(name) if valid_name(name) => name,
            Some(name) => {
                return Err(LabelError::InvalidName {
                    label: label.to_owned(),
                    name: name.to_owned(),
                });
            }
            None => package
                .rsplit('/')
                .next()
                .filter(|last| !last.is_empty())
                .ok_or_else(|| LabelError::MissingName {
                    label: label.to_owned(),
                })?,
        };

        Ok(Self {
            repository: repository.to_owned(),
            package: package.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for BuildLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.repository.is_empty() {
            write!(f, "@{}", self.repository)?;
        }
        write!(f, "//{}:{}", self.package, self.name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "tests use expect for descriptive failures")]
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("//:generator", "", "", "generator")]
    #[case("//tools/generator", "", "tools/generator", "generator")]
    #[case("//app:App", "", "app", "App")]
    #[case("@//app:App", "", "app", "App")]
    #[case("@rules_xcodeproj//tools:runner", "rules_xcodeproj", "tools", "runner")]
    #[case("@@rules_swift~1.0//swift:lib", "@rules_swift~1.0", "swift", "lib")]
    fn parses_valid_labels(
        #[case] text: &str,
        #[case] repository: &str,
        #[case] package: &str,
        #[case] name: &str,
    ) {
        let label: BuildLabel = text.parse().expect("valid label");
        assert_eq!(label.repository(), repository);
        assert_eq!(label.package(), package);
        assert_eq!(label.name(), name);
    }

    #[rstest]
    #[case("generator")]
    #[case(":generator")]
    #[case("@repo:generator")]
    fn rejects_labels_without_separator(#[case] text: &str) {
        let err = text.parse::<BuildLabel>().expect_err("missing separator");
        assert!(matches!(err, LabelError::MissingPackageSeparator { .. }));
    }

    #[rstest]
    #[case("//")]
    #[case("//:")]
    fn rejects_labels_without_a_name(#[case] text: &str) {
        let err = text.parse::<BuildLabel>().expect_err("no name");
        assert!(matches!(
            err,
            LabelError::MissingName { .. } | LabelError::InvalidName { .. }
        ));
    }

    #[rstest]
    #[case("//app//core:lib")]
    #[case("///app:lib")]
    #[case("//app/:lib")]
    #[case("//my app:lib")]
    fn rejects_malformed_packages(#[case] text: &str) {
        let err = text.parse::<BuildLabel>().expect_err("bad package");
        assert!(matches!(err, LabelError::InvalidPackage { .. }));
    }

    #[test]
    fn rejects_invalid_repository() {
        let err = "@re po//app:lib".parse::<BuildLabel>().expect_err("bad repo");
        assert!(matches!(err, LabelError::InvalidRepository { .. }));
    }

    #[test]
    fn rejects_name_with_colon() {
        let err = "//app:lib:extra".parse::<BuildLabel>().expect_err("bad name");
        assert!(matches!(err, LabelError::InvalidName { .. }));
    }

    #[rstest]
    #[case("//tools/generator", "//tools/generator:generator")]
    #[case("@//app:App", "//app:App")]
    #[case("@repo//:all", "@repo//:all")]
    fn displays_canonical_form(#[case] text: &str, #[case] expected: &str) {
        let label: BuildLabel = text.parse().expect("valid label");
        assert_eq!(label.to_string(), expected);
        let reparsed: BuildLabel = expected.parse().expect("canonical form parses");
        assert_eq!(reparsed, label);
    }

    #[rstest]
    #[case("generator", "projgen::label::missing_package_separator")]
    #[case("@bad repo//:x", "projgen::label::invalid_repository")]
    #[case("//app//core:lib", "projgen::label::invalid_package")]
    #[case("//", "projgen::label::missing_name")]
    fn errors_carry_diagnostic_codes(#[case] text: &str, #[case] code: &str) {
        let err = text.parse::<BuildLabel>().expect_err("invalid label");
        let actual = err.code().map(|c| c.to_string());
        assert_eq!(actual.as_deref(), Some(code));
    }
}
