//! Emoji subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_emoji_search() {
    cargo_bin_cmd!("glyphmark")
        .args(["emoji", "rocket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🚀"))
        .stdout(predicate::str::contains(":rocket:"));
}

#[test]
fn test_emoji_search_no_match() {
    cargo_bin_cmd!("glyphmark")
        .args(["emoji", "zzzz-no-such-emoji"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No emoji matching"));
}
