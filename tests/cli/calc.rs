use crate::cli::support::{graded_class_dir, gradebook, write_gradebook};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_calc_all_gradebooks() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .arg("calc")
        .assert()
        .success()
        .stdout(
            "Carol Chen\n\
             \tOverall average: No results\n\
             \tClass Participation: No results\n\
             \tMajor Assessments: No results\n\
             \tMinor Assessments: No results\n\
             Bob Young\n\
             \tOverall average: 62.5\n\
             \tClass Participation: No results\n\
             \tMajor Assessments: 70\n\
             \tMinor Assessments: 50\n\
             Alice Zephyr\n\
             \tOverall average: 82.5\n\
             \tClass Participation: No results\n\
             \tMajor Assessments: 90\n\
             \tMinor Assessments: 70\n",
        );
}

#[test]
fn test_calc_limited_to_term() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["calc", "--term", "q1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bob Young\n\
             \tOverall average: 70\n\
             \tClass Participation: No results\n\
             \tMajor Assessments: 70\n\
             \tMinor Assessments: No results\n",
        ))
        .stdout(predicate::str::contains(
            "Alice Zephyr\n\tOverall average: 86.25\n",
        ));
}

#[test]
fn test_calc_average_alias_and_single_dash_term() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["average", "-term", "q2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bob Young\n\tOverall average: 50\n",
        ));
}

#[test]
fn test_calc_unknown_term() {
    let dir = graded_class_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["calc", "--term", "q9"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("gradebook calc: \"q9\" is not a valid term\n");
}

#[test]
fn test_calc_unknown_student_prints_nothing() {
    let dir = graded_class_dir();
    write_gradebook(
        dir.path(),
        "quiz-vocab-3-20240320.gradebook",
        "quiz",
        r#"[{"email": "mallory@example.com", "score": 100}]"#,
    );

    gradebook()
        .current_dir(dir.path())
        .arg("calc")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("mallory@example.com"));
}

#[test]
fn test_calc_malformed_file_name() {
    let dir = graded_class_dir();
    write_gradebook(dir.path(), "quiz-undated.gradebook", "quiz", "[]");

    gradebook()
        .current_dir(dir.path())
        .arg("calc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[quiz-undated.gradebook] does not contain a valid YYYYMMDD date",
        ));
}

#[test]
fn test_calc_json() {
    let dir = graded_class_dir();

    let output = gradebook()
        .current_dir(dir.path())
        .args(["--format", "json", "calc", "--term", "q1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["class"], "Latin 1");
    assert_eq!(json["term"], "q1");

    let carol = &json["students"][0];
    assert_eq!(carol["email"], "carol@example.com");
    assert!(carol["overall"].is_null());

    let alice = &json["students"][2];
    assert_eq!(alice["overall"], 86.25);
    assert_eq!(alice["categories"][1]["category"], "major");
    assert_eq!(alice["categories"][1]["label"], "Major Assessments");
    assert_eq!(alice["categories"][1]["average"], 90.0);
}
