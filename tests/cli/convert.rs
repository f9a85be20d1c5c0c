//! Convert subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_stdin_to_stdout() {
    cargo_bin_cmd!("glyphmark")
        .arg("convert")
        .write_stdin("# Heading\n\n**bold** and `code`\n")
        .assert()
        .success()
        .stdout("# Heading\n\n**𝐛𝐨𝐥𝐝** and `𝚌𝚘𝚍𝚎`\n");
}

#[test]
fn test_convert_empty_stdin() {
    cargo_bin_cmd!("glyphmark")
        .arg("convert")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_convert_file_to_stdout_leaves_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "*note*\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("*𝑛𝑜𝑡𝑒*\n");

    assert_eq!(fs::read_to_string(&test_file).unwrap(), "*note*\n");
}

#[test]
fn test_convert_write_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "Some **bold** text.\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--write", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert_eq!(content, "Some **𝐛𝐨𝐥𝐝** text.\n");
}

#[test]
fn test_convert_write_requires_file() {
    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--write"])
        .write_stdin("*x*")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires an input file"));
}

#[test]
fn test_convert_diff_reports_changes() {
    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--diff"])
        .write_stdin("plain\n*styled*\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Diff in <stdin>:"))
        .stdout(predicate::str::contains("-*styled*"))
        .stdout(predicate::str::contains("+*𝑠𝑡𝑦𝑙𝑒𝑑*"));
}

#[test]
fn test_convert_diff_nothing_to_do() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("plain.md");
    fs::write(&test_file, "# Heading\n\nParagraph.\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--diff", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to convert"));
}

#[test]
fn test_convert_emoji_flag() {
    cargo_bin_cmd!("glyphmark")
        .arg("convert")
        .write_stdin("go :rocket:")
        .assert()
        .success()
        .stdout("go 🚀");

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--no-emoji"])
        .write_stdin("go :rocket:")
        .assert()
        .success()
        .stdout("go :rocket:");
}

#[test]
fn test_convert_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir(&nested).unwrap();
    fs::write(temp_dir.path().join(".glyphmark.toml"), "emoji = false\n").unwrap();
    let test_file = nested.join("notes.md");
    fs::write(&test_file, ":rocket: **x**").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(":rocket: **𝐱**");
}

#[test]
fn test_convert_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "flavor = \"commonmark\"\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["convert", "--config", config_file.to_str().unwrap()])
        .write_stdin("~~*x*~~")
        .assert()
        .success()
        .stdout("~~*𝑥*~~");
}
