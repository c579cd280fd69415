//! File paths listed verbatim in the generated project.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Where a [`FilePath`] is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FileKind {
    /// Relative to the workspace root.
    #[default]
    Project,
    /// Inside an external repository.
    External,
    /// Produced by the build.
    Generated,
    /// Owned by the generator itself.
    Internal,
}

impl FileKind {
    /// Single-character wire spelling.
    #[must_use]
    pub const fn as_wire_str(self) -> &'static str {
        match self {
            Self::Project => "p",
            Self::External => "e",
            Self::Generated => "g",
            Self::Internal => "i",
        }
    }

    /// Parse the single-character wire spelling.
    #[must_use]
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "p" => Some(Self::Project),
            "e" => Some(Self::External),
            "g" => Some(Self::Generated),
            "i" => Some(Self::Internal),
            _ => None,
        }
    }
}

/// A path plus the root it is relative to.
///
/// # Examples
///
/// ```
/// use projgen::path::{FileKind, FilePath};
///
/// let readme = FilePath::project("README.md");
/// assert_eq!(readme.kind(), FileKind::Project);
/// assert_eq!(readme.to_string(), "README.md");
///
/// let assets = FilePath::new(FileKind::Generated, "app/Assets.xcassets").folder();
/// assert!(assets.is_folder());
/// assert_eq!(assets.to_string(), "$(BUILD_DIR)/app/Assets.xcassets/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath {
    kind: FileKind,
    path: Utf8PathBuf,
    is_folder: bool,
}

impl FilePath {
    /// A file path of the given kind.
    #[must_use]
    pub fn new(kind: FileKind, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            is_folder: false,
        }
    }

    /// A workspace-relative file path.
    #[must_use]
    pub fn project(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(FileKind::Project, path)
    }

    /// Mark the path as a folder reference.
    #[must_use]
    pub fn folder(mut self) -> Self {
        self.is_folder = true;
        self
    }

    /// Root kind.
    #[must_use]
    pub const fn kind(&self) -> FileKind {
        self.kind
    }

    /// Path relative to its root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the path names a folder reference rather than a file.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.is_folder
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.kind {
            FileKind::Project => "",
            FileKind::External => "$(BAZEL_EXTERNAL)/",
            FileKind::Generated => "$(BUILD_DIR)/",
            FileKind::Internal => "$(INTERNAL_DIR)/",
        };
        let slash = if self.is_folder { "/" } else { "" };
        write!(f, "{root}{}{slash}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FileKind::Project)]
    #[case(FileKind::External)]
    #[case(FileKind::Generated)]
    #[case(FileKind::Internal)]
    fn wire_spelling_is_reversible(#[case] kind: FileKind) {
        assert_eq!(FileKind::from_wire_str(kind.as_wire_str()), Some(kind));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(FileKind::from_wire_str("x"), None);
    }

    #[test]
    fn kinds_order_before_paths() {
        let external = FilePath::new(FileKind::External, "a");
        let project = FilePath::project("z");
        assert!(project < external);
    }
}
