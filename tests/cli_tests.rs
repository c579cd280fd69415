//! Integration tests for the `projgen` binary using `assert_cmd`.
//!
//! These tests run the compiled binary against fixture payloads and check
//! its output and exit status.

use anyhow::{Context, Result, ensure};
use assert_cmd::Command;
use predicates::prelude::*;
use projgen::wire;
use test_support::{PayloadFile, sample_project};

fn projgen() -> Result<Command> {
    Command::cargo_bin("projgen").context("locate projgen binary")
}

#[test]
fn check_prints_summary() -> Result<()> {
    projgen()?
        .arg("check")
        .arg("tests/data/full.json")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Sample: 3 configuration(s), 2 hosted target(s), 4 extra file(s), minimum version 14.3.0\n",
        ));
    Ok(())
}

#[test]
fn check_reads_standard_input() -> Result<()> {
    let payload = std::fs::read("tests/data/minimal.json").context("read fixture")?;
    projgen()?
        .args(["check", "-"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("App: 1 configuration(s)"));
    Ok(())
}

#[test]
fn dump_prints_canonical_payload() -> Result<()> {
    let output = projgen()?
        .args(["dump", "tests/data/full.json"])
        .output()
        .context("run projgen dump")?;
    ensure!(output.status.success(), "dump should succeed");
    let expected = wire::encode(&sample_project()).context("encode sample")?;
    let stdout = output
        .stdout
        .strip_suffix(b"\n")
        .context("dump output ends with a newline")?;
    ensure!(
        stdout == expected.as_slice(),
        "dump output should be the canonical encoding, got: {}",
        String::from_utf8_lossy(stdout)
    );
    Ok(())
}

#[test]
fn dump_pretty_round_trips() -> Result<()> {
    let output = projgen()?
        .args(["dump", "--pretty", "tests/data/full.json"])
        .output()
        .context("run projgen dump --pretty")?;
    ensure!(output.status.success(), "dump --pretty should succeed");
    let project = wire::decode(&output.stdout).context("decode dump output")?;
    ensure!(project == sample_project(), "pretty dump should decode to the sample");
    Ok(())
}

#[test]
fn missing_field_fails_with_field_name() -> Result<()> {
    let file = PayloadFile::new(br#"{"n": "App", "B": "Debug"}"#)?;
    projgen()?
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field `generatorLabel`"));
    Ok(())
}

#[test]
fn strict_rejects_unknown_tags() -> Result<()> {
    projgen()?
        .args(["check", "tests/data/future_tags.json"])
        .assert()
        .success();
    projgen()?
        .args(["check", "--strict", "tests/data/future_tags.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tag `zz`"));
    Ok(())
}

#[test]
fn missing_file_is_reported() -> Result<()> {
    projgen()?
        .args(["check", "tests/data/does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.json"));
    Ok(())
}
