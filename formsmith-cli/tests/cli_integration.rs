//! Drive the `formsmith` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn formsmith(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("formsmith").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn placed_id(output: &[u8]) -> String {
    String::from_utf8_lossy(output).trim().to_string()
}

#[test]
#[serial]
fn kinds_lists_the_palette() {
    let dir = TempDir::new().unwrap();
    formsmith(dir.path())
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("TextField"))
        .stdout(predicate::str::contains("SpacerField"));
}

#[test]
#[serial]
fn design_then_validate() {
    let dir = TempDir::new().unwrap();

    formsmith(dir.path())
        .args(["new", "form.json", "--name", "Feedback"])
        .assert()
        .success();

    let out = formsmith(dir.path())
        .args(["place", "form.json", "text"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = placed_id(&out.stdout);

    let out = formsmith(dir.path())
        .args(["place", "form.json", "title", "--over", &text, "--half", "top"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let title = placed_id(&out.stdout);

    let form = fs::read_to_string(dir.path().join("form.json")).unwrap();
    assert!(form.find(&title).unwrap() < form.find(&text).unwrap());

    formsmith(dir.path())
        .args(["check", "form.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 field(s) OK"));

    fs::write(
        dir.path().join("values.json"),
        format!(r#"{{"{text}":"hello"}}"#),
    )
    .unwrap();
    formsmith(dir.path())
        .args(["validate", "form.json", "values.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
#[serial]
fn new_respects_configured_name_bounds() {
    let dir = TempDir::new().unwrap();

    formsmith(dir.path())
        .args(["new", "form.json", "--name", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));

    fs::write(dir.path().join("formsmith.toml"), "[form_name]\nmin = 2\n").unwrap();
    formsmith(dir.path())
        .args(["new", "form.json", "--name", "Hi"])
        .assert()
        .success();
}

#[test]
#[serial]
fn env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("formsmith.toml"), "[form_name]\nmin = 2\n").unwrap();

    formsmith(dir.path())
        .env("FORMSMITH_FORM_NAME__MIN", "10")
        .args(["new", "form.json", "--name", "Feedback"])
        .assert()
        .failure();
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    formsmith(dir.path())
        .args(["check", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
