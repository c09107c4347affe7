use crate::cli::support::{class_dir, gradebook};
use std::fs;

#[test]
fn test_emails_in_student_name_order() {
    let dir = class_dir();

    gradebook()
        .current_dir(dir.path())
        .arg("emails")
        .assert()
        .success()
        .stdout("carol@example.com\nbob@example.com\nalice@example.com\n");
}

#[test]
fn test_emails_dir_from_environment() {
    let dir = class_dir();

    gradebook()
        .env("GRADEBOOK_DIR", dir.path())
        .arg("emails")
        .assert()
        .success()
        .stdout("carol@example.com\nbob@example.com\nalice@example.com\n");
}

#[test]
fn test_emails_relative_class_is_found_in_dir() {
    let dir = class_dir();
    fs::rename(dir.path().join("class.json"), dir.path().join("latin.json")).unwrap();

    gradebook()
        .arg("--dir")
        .arg(dir.path())
        .args(["--class", "latin.json", "emails"])
        .assert()
        .success()
        .stdout("carol@example.com\nbob@example.com\nalice@example.com\n");
}

#[test]
fn test_emails_absolute_class_path() {
    let dir = class_dir();
    let other = tempfile::tempdir().unwrap();

    gradebook()
        .current_dir(other.path())
        .arg("--class")
        .arg(dir.path().join("class.json"))
        .arg("emails")
        .assert()
        .success()
        .stdout("carol@example.com\nbob@example.com\nalice@example.com\n");
}
