// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fgrok() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fgrok"))
}

#[test]
fn unknown_flag_prints_usage_and_exits_one() {
    fgrok()
        .args(["-z", "term"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn missing_configuration_flag_exits_one() {
    fgrok()
        .args(["-f", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("configuration"))
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn unreadable_configuration_file_exits_one() {
    fgrok()
        .args(["-R", "/nonexistent/cfg.toml", "-f", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read configuration file"))
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn configuration_without_data_root_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = dir.path().join("cfg.toml");
    fs::write(&cfg, "source_root = \"/src\"\n").expect("write config");

    fgrok()
        .args(["-R", cfg.to_str().expect("utf8 path"), "-f", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("data root"))
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn no_facet_set_is_an_invalid_query() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = dir.path().join("cfg.toml");
    fs::write(
        &cfg,
        format!("data_root = \"{}\"\n", dir.path().display()),
    )
    .expect("write config");

    fgrok()
        .args(["-R", cfg.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("did not specify a valid query"))
        .stderr(predicate::str::contains("USAGE"));
}

#[test]
fn whitespace_only_facet_is_an_invalid_query() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = dir.path().join("cfg.toml");
    fs::write(
        &cfg,
        format!("data_root = \"{}\"\n", dir.path().display()),
    )
    .expect("write config");

    fgrok()
        .args(["-R", cfg.to_str().expect("utf8 path"), "-f", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("did not specify a valid query"));
}

#[test]
fn long_help_exits_zero() {
    fgrok()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("faceted code search driver"));
}
