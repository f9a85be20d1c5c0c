//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("glyphmark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Glyphmark rewrites the text"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("glyphmark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("glyphmark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("glyphmark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_convert_help() {
    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite strong, emphasis and code"));
}

#[test]
fn test_subcommand_help_carries_styles_and_examples() {
    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STYLES:"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("glyphmark")
        .args(["convert", "/nonexistent/file.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "flavor = [").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--config", config_file.to_str().unwrap()])
        .write_stdin("*x*")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_unknown_flavor_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("glyphmark.toml");
    fs::write(&config_file, "flavor = \"wiki\"\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--config", config_file.to_str().unwrap()])
        .write_stdin("*x*")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
