use crate::cli::support::{class_dir, gradebook, CLASS_JSON};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_validate_ok() {
    let dir = class_dir();

    gradebook()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout("Latin 1: ok\n");
}

#[test]
fn test_validate_reports_every_problem() {
    let dir = class_dir();
    let broken = CLASS_JSON
        .replace(r#""cp": 20"#, r#""cp": 10"#)
        .replace(r#""quiz": "minor","#, "");
    fs::write(dir.path().join("class.json"), broken).unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "gradebook validate: problem validating class:\n",
        ))
        .stderr(predicate::str::contains(
            "weights_by_assignment_category must add up to 100 (found 90)",
        ))
        .stderr(predicate::str::contains(
            "assignment_categories {cp, major, minor} and categories_by_assignment_type \
             {cp, major} are not equal sets",
        ));
}

#[test]
fn test_every_command_refuses_invalid_class() {
    let dir = class_dir();
    fs::write(
        dir.path().join("class.json"),
        CLASS_JSON.replace(r#""start": "20240401""#, r#""start": "20240701""#),
    )
    .unwrap();

    for command in ["names", "emails", "calc", "unscored"] {
        gradebook()
            .current_dir(dir.path())
            .arg(command)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains(
                "term \"q2\" starts on 20240701 but ends on 20240630",
            ));
    }
}

#[test]
fn test_students_keyed_by_id_are_accepted() {
    let dir = class_dir();
    fs::write(
        dir.path().join("class.json"),
        CLASS_JSON
            .replace("bob@example.com", "byoung")
            .replace(r#""first_name": "Carol", "last_name": "Chen""#, r#""first_name": "Carol""#),
    )
    .unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout("Latin 1: ok\n");

    gradebook()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .success()
        .stdout("Carol \nBob Young\nAlice Zephyr\n");
}

#[test]
fn test_validate_json() {
    let dir = class_dir();
    fs::write(dir.path().join("class.json"), r#"{ "name": "Empty" }"#).unwrap();

    gradebook()
        .current_dir(dir.path())
        .args(["--format", "json", "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"validation_error\""));
}
