use crate::cli::support::{class_dir, graded_class_dir, gradebook, write_gradebook};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_unscored_counts_per_category() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .arg("unscored")
        .assert()
        .success()
        .stdout(
            "Carol Chen:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 1 unscored assignment\n\
             \tMinor Assessments: 2 unscored assignments\n\
             Bob Young:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 0 unscored assignments\n\
             \tMinor Assessments: 1 unscored assignment\n\
             Alice Zephyr:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 0 unscored assignments\n\
             \tMinor Assessments: 0 unscored assignments\n",
        );
}

#[test]
fn test_unscored_one_null_one_scored() {
    let dir = class_dir();
    write_gradebook(
        dir.path(),
        "quiz-vocab-1-20240315.gradebook",
        "quiz",
        r#"[{"email": "alice@example.com", "score": 95}, {"email": "bob@example.com", "score": null}]"#,
    );

    gradebook()
        .current_dir(dir.path())
        .arg("unscored")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bob Young:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 0 unscored assignments\n\
             \tMinor Assessments: 1 unscored assignment\n",
        ))
        .stdout(predicate::str::contains(
            "Alice Zephyr:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 0 unscored assignments\n\
             \tMinor Assessments: 0 unscored assignments\n",
        ));
}

#[test]
fn test_missing_alias_with_term() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["missing", "--term", "q2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Carol Chen:\n\
             \tClass Participation: 0 unscored assignments\n\
             \tMajor Assessments: 0 unscored assignments\n\
             \tMinor Assessments: 1 unscored assignment\n",
        ));
}

#[test]
fn test_unscored_json() {
    let dir = graded_class_dir();

    let output = gradebook()
        .current_dir(dir.path())
        .args(["unscored", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["term"].is_null());
    let carol = &json["students"][0];
    assert_eq!(carol["categories"][2]["category"], "minor");
    assert_eq!(carol["categories"][2]["unscored"], 2);
}
