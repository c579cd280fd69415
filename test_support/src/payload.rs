//! Helpers for constructing IR fixtures in tests.

use anyhow::{Context, Result};
use projgen::path::{FileKind, FilePath};
use projgen::project::{Project, ProjectOptions, TargetArgs, TargetEnvs, TargetHosts};
use projgen::scheme::SchemeAutogenerationMode;
use projgen::target::TargetId;
use projgen::version::SemanticVersion;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The smallest payload that decodes: every required tag and nothing else.
#[must_use]
pub fn minimal_payload() -> Value {
    json!({
        "n": "App",
        "B": "Debug",
        "g": "//:generator",
        "R": "//:runner",
        "m": "1.0.0",
        "i": "/usr/bin/index-import",
    })
}

/// Serialise a fixture to bytes.
///
/// # Panics
///
/// Panics if `serde_json` cannot serialise the value, which does not happen
/// for values built with `json!`.
#[must_use]
pub fn payload_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("fixture serialises")
}

fn id(text: &str) -> TargetId {
    TargetId::new(text).expect("fixture target id")
}

/// A project with every optional attribute set away from its default.
///
/// # Panics
///
/// Panics if a fixture literal fails validation.
#[must_use]
pub fn sample_project() -> Project {
    let hosts = TargetHosts::from([(id("app"), vec![id("widget"), id("watch")])]);
    let args = TargetArgs::from([(id("app"), vec!["--verbose".to_owned(), String::new()])]);
    let envs = TargetEnvs::from([(
        id("app"),
        BTreeMap::from([("OS_ACTIVITY_MODE".to_owned(), "disable".to_owned())]),
    )]);
    Project::builder(
        "Sample",
        "rules_xcodeproj",
        "@rules_xcodeproj//tools/generator".parse().expect("label"),
        "//:xcodeproj.runner".parse().expect("label"),
        SemanticVersion::new(14, 3, 0),
        "/tmp/index-import",
    )
    .options(ProjectOptions {
        development_region: "fr".to_owned(),
        indent_width: Some(2),
        organization_name: Some("Example Org".to_owned()),
        tab_width: Some(8),
        uses_tabs: Some(false),
    })
    .build_tool_path("/usr/local/bin/bazelisk")
    .ide_configurations(["Debug", "Release", "Profile"])
    .default_ide_configuration("Release")
    .target_hosts(hosts)
    .args(args)
    .envs(envs)
    .extra_files([
        FilePath::project("README.md"),
        FilePath::new(FileKind::External, "some_repo/BUILD"),
        FilePath::new(FileKind::Generated, "app/Info.plist"),
        FilePath::project("Resources").folder(),
    ])
    .scheme_autogeneration_mode(SchemeAutogenerationMode::Auto)
    .force_dependency_linking(false)
    .pre_build_script("echo pre")
    .post_build_script("echo post\nexit 0")
    .build()
    .expect("sample project")
}

/// An IR payload written to a temporary directory.
#[derive(Debug)]
pub struct PayloadFile {
    _dir: TempDir,
    path: PathBuf,
}

impl PayloadFile {
    /// Write `bytes` to `ir.json` inside a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let dir = TempDir::new().context("create temp dir for payload")?;
        let path = dir.path().join("ir.json");
        fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { _dir: dir, path })
    }

    /// Location of the payload file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_decodes() {
        let project = projgen::wire::decode(&payload_bytes(&minimal_payload())).expect("decode");
        assert_eq!(project.name(), "App");
    }

    #[test]
    fn payload_file_holds_bytes() {
        let file = PayloadFile::new(b"{}").expect("payload file");
        assert_eq!(fs::read(file.path()).expect("read"), b"{}");
    }
}
