//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("glyphmark")
        .arg("render")
        .write_stdin("**bold** and *it*\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>𝐛𝐨𝐥𝐝</strong>"))
        .stdout(predicate::str::contains("<em>𝑖𝑡</em>"));
}

#[test]
fn test_render_drops_raw_html_by_default() {
    cargo_bin_cmd!("glyphmark")
        .arg("render")
        .write_stdin("<script>alert(1)</script>\n\nok <b>x</b>\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<script").not())
        .stdout(predicate::str::contains("<b>").not())
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_render_keeps_safe_html_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("glyphmark.toml");
    fs::write(&config_file, "[render]\nskip_html = false\n").unwrap();

    cargo_bin_cmd!("glyphmark")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("<script>alert(1)</script>\n\nok <b>x</b>\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<script").not())
        .stdout(predicate::str::contains("<b>x</b>"));
}
