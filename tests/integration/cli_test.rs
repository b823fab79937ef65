//! CLI behavior tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::fixtures_dir;

fn itv() -> Command {
    Command::cargo_bin("itv").expect("itv binary should build")
}

#[test]
fn help_lists_subcommands() {
    itv()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("play")
                .and(predicate::str::contains("info"))
                .and(predicate::str::contains("config"))
                .and(predicate::str::contains("completions")),
        );
}

#[test]
fn version_includes_package_version() {
    itv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_reports_frame_count() {
    itv()
        .arg("info")
        .arg(fixtures_dir().join("fib.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Frames")
                .and(predicate::str::contains("8"))
                .and(predicate::str::contains("Functions")),
        );
}

#[test]
fn info_missing_file_fails() {
    itv()
        .arg("info")
        .arg(fixtures_dir().join("does_not_exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load trace"));
}

#[test]
fn info_malformed_trace_fails() {
    itv()
        .arg("info")
        .arg(fixtures_dir().join("malformed.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed trace JSON"));
}

#[test]
fn play_refuses_without_a_tty() {
    // assert_cmd pipes stdout, so the player must bail before touching
    // the terminal
    itv()
        .arg("play")
        .arg(fixtures_dir().join("fib.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn play_rejects_out_of_range_rate() {
    itv()
        .args(["play", "trace.json", "--rate", "0"])
        .assert()
        .failure();
    itv()
        .args(["play", "trace.json", "--rate", "101"])
        .assert()
        .failure();
}

#[test]
fn completions_generate_for_bash() {
    itv()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("itv"));
}

#[test]
fn config_show_prints_defaults() {
    let temp = TempDir::new().unwrap();

    itv()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_rate")
                .and(predicate::str::contains("50"))
                .and(predicate::str::contains("theme")),
        );
}

#[test]
fn config_set_round_trips_through_show() {
    let temp = TempDir::new().unwrap();

    itv()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .args(["config", "set", "default_rate", "80"])
        .assert()
        .success();

    itv()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    itv()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .args(["config", "set", "bogus", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_set_rejects_out_of_range_rate() {
    let temp = TempDir::new().unwrap();

    itv()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .args(["config", "set", "default_rate", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rate must be between"));
}
