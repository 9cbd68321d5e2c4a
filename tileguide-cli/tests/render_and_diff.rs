use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn tileguide_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tileguide"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_prints_page_to_stdout() {
    tileguide_cmd()
        .arg("render")
        .assert()
        .success()
        .stdout(contains("<!DOCTYPE html>"))
        .stdout(contains("<span class=\"step-badge\">Step 1</span>"))
        .stdout(contains("<h3>Launch SAP Fiori Launchpad Designer</h3>"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn render_stdout_is_stable_across_runs() {
    let first = tileguide_cmd().arg("render").output().expect("run #1");
    let second = tileguide_cmd().arg("render").output().expect("run #2");
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn render_out_then_diff_reports_no_differences() {
    let dir = TempDir::new().expect("dir");
    let out = dir.path().join("index.html");

    tileguide_cmd()
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("✎"));
    assert!(out.exists());

    tileguide_cmd()
        .args(["render", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("(unchanged)"));

    tileguide_cmd()
        .args(["diff", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("No differences"));
}

#[test]
fn dry_run_reports_and_writes_nothing() {
    let dir = TempDir::new().expect("dir");
    let out = dir.path().join("index.html");

    tileguide_cmd()
        .args(["render", "--dry-run", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("[dry-run]"))
        .stdout(contains("index.html"));

    let mut entries = fs::read_dir(dir.path()).expect("read_dir");
    assert!(entries.next().is_none(), "dry-run must not create files");
}

#[test]
fn dry_run_requires_out() {
    tileguide_cmd()
        .args(["render", "--dry-run"])
        .assert()
        .failure();
}

#[test]
fn diff_shows_local_edit() {
    let dir = TempDir::new().expect("dir");
    let out = dir.path().join("index.html");
    tileguide_cmd().args(["render", "--out"]).arg(&out).assert().success();

    let edited = fs::read_to_string(&out)
        .expect("read")
        .replace("Validation Tips", "Checks");
    fs::write(&out, edited).expect("write");

    tileguide_cmd()
        .args(["diff", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("--- a/index.html"))
        .stdout(contains("+++ b/index.html"))
        .stdout(contains("+      <h2>Validation Tips</h2>"));
}

#[test]
fn outline_json_lists_six_steps() {
    let output = tileguide_cmd()
        .args(["outline", "--json"])
        .output()
        .expect("run outline");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let steps = value["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["badge"], "Step 1");
    assert_eq!(steps[5]["title"], "Transport and Test the Tile");
    assert_eq!(value["prerequisites"].as_array().expect("prereqs").len(), 4);
    assert_eq!(value["step_count"], 6);
    assert_eq!(value["prerequisite_count"], 4);
}

#[test]
fn outline_table_names_every_step() {
    tileguide_cmd()
        .arg("outline")
        .assert()
        .success()
        .stdout(contains("4 prerequisites | 6 steps"))
        .stdout(contains("Step 6"))
        .stdout(contains("/screenshots/04-target-mapping.svg"));
}
