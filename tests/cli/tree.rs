//! Tree subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_tree_stdin() {
    cargo_bin_cmd!("glyphmark")
        .arg("tree")
        .write_stdin("# Heading\n\n**bold**")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROOT"))
        .stdout(predicate::str::contains("HEADING"))
        .stdout(predicate::str::contains("STRONG_MARKER"));
}

#[test]
fn test_tree_json() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "## Title\n\n- [x] *done*\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["tree", "--json", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "heading""#))
        .stdout(predicate::str::contains(r#""depth": 2"#))
        .stdout(predicate::str::contains(r#""checked": true"#))
        .stdout(predicate::str::contains("𝑑𝑜𝑛𝑒"));
}
