use crate::cli::support::{class_dir, gradebook};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_names_in_last_name_order() {
    let dir = class_dir();

    gradebook()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .success()
        .stdout("Carol Chen\nBob Young\nAlice Zephyr\n");
}

#[test]
fn test_names_last_first() {
    let dir = class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["names", "--last-first"])
        .assert()
        .success()
        .stdout("Chen, Carol\nYoung, Bob\nZephyr, Alice\n");
}

#[test]
fn test_names_single_dash_flags() {
    let dir = class_dir();

    gradebook()
        .args(["names", "-last-first", "-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chen, Carol\n"));
}

#[test]
fn test_names_json() {
    let dir = class_dir();

    let output = gradebook()
        .current_dir(dir.path())
        .args(["--format", "json", "names"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["class"], "Latin 1");
    assert_eq!(json["students"].as_array().unwrap().len(), 3);
    assert_eq!(json["students"][0]["email"], "carol@example.com");
    assert_eq!(json["students"][2]["last_name"], "Zephyr");
}
