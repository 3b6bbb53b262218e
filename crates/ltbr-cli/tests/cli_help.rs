use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    cargo_bin_cmd!("ltbr")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("[FILE]"));
}

#[test]
fn test_stats_help_shows_top_flag() {
    cargo_bin_cmd!("ltbr")
        .args(["stats", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--top"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("ltbr")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
