use crate::cli::support::{class_dir, gradebook};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_help_flag() {
    gradebook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: gradebook"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("unscored"));
}

#[test]
fn test_single_dash_help_and_version() {
    gradebook()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: gradebook"));

    gradebook()
        .arg("-version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}

#[test]
fn test_no_command_prints_banner() {
    gradebook()
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook --help"));
}

#[test]
fn test_unknown_flag_exits_1() {
    gradebook()
        .args(["calc", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("gradebook calc: "))
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_missing_required_flag_is_prefixed() {
    gradebook()
        .args(["new", "--type", "quiz"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("gradebook new: "))
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_unknown_flag_json_usage_error() {
    let output = gradebook()
        .args(["--format", "json", "calc", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 1);
}

#[test]
fn test_missing_class_file() {
    let dir = tempfile::tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("gradebook names:"))
        .stderr(predicate::str::contains("class.json"));
}

#[test]
fn test_malformed_class_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("class.json"), "{ nope").unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("emails")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("problem parsing"));
}

#[test]
fn test_missing_gradebook_directory() {
    let dir = class_dir();

    gradebook()
        .arg("--dir")
        .arg(dir.path().join("nope"))
        .arg("--class")
        .arg(dir.path().join("class.json"))
        .arg("calc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["--verbose", "emails"])
        .assert()
        .success()
        .stdout("carol@example.com\nbob@example.com\nalice@example.com\n")
        .stderr(predicate::str::contains("class_loaded"));
}
