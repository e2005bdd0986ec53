//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn persona() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("persona").unwrap()
}

/// Write an answer file giving every standard question `value`, with
/// `overrides` applied on top.
fn write_answers(dir: &Path, value: u8, overrides: &[(u32, u8)]) -> PathBuf {
    let mut answers = serde_json::Map::new();
    for id in 1..=70u32 {
        answers.insert(id.to_string(), value.into());
    }
    for &(id, v) in overrides {
        answers.insert(id.to_string(), v.into());
    }
    let path = dir.join("answers.json");
    std::fs::write(&path, serde_json::Value::Object(answers).to_string()).unwrap();
    path
}

#[test]
fn analyze_text_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), 3, &[]);

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personality type: Pragmatic Reflective Individualist",
        ))
        .stdout(predicate::str::contains("Holland code RIA"))
        .stdout(predicate::str::contains("Egogram: Flat pattern"))
        .stdout(predicate::str::contains("Resilience: Normal (50)"));
}

#[test]
fn analyze_json_output() {
    let dir = TempDir::new().unwrap();
    // social and artistic interests up front
    let answers = write_answers(dir.path(), 3, &[(22, 5), (23, 5), (20, 4), (21, 4)]);

    let output = persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["interestProfile"]["hollandCode"], "SAR");
    assert_eq!(report["interestProfile"]["scores"]["social"], 100);
    assert_eq!(report["careerAdvice"]["careers"][0], "Art or music teacher");
    assert_eq!(report["traitProfile"]["scores"]["stability"], 50);
}

#[test]
fn analyze_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), 4, &[]);
    let report_path = dir.path().join("out").join("report.json");

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(report["summary"]["typeName"].is_string());
}

#[test]
fn analyze_partial_answers_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"{"1": 5, "2": 5}"#).unwrap();

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("unanswered questions"));
}

#[test]
fn analyze_strict_rejects_partial_answers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"{"1": 5, "2": 5}"#).unwrap();

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&path)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("68 question(s) unanswered: 3, 4, 5"));
}

#[test]
fn analyze_out_of_range_answer() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), 3, &[(7, 9)]);

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("answer for question 7 is 9"));
}

#[test]
fn analyze_unknown_format() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), 3, &[]);

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'yaml'"));
}

#[test]
fn analyze_misconfigured_bank() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bank.toml");
    std::fs::write(
        &bank,
        r#"
[[questions]]
id = 1
section = "bigfive"
trait = "openness"
text = "I enjoy new ideas."
"#,
    )
    .unwrap();
    let answers = write_answers(dir.path(), 3, &[]);

    persona()
        .arg("analyze")
        .arg("--answers")
        .arg(&answers)
        .arg("--bank")
        .arg(&bank)
        .assert()
        .failure()
        .stderr(predicate::str::contains("question bank misconfigured"))
        .stderr(predicate::str::contains(
            "no questions for trait 'conscientiousness' in section 'bigfive'",
        ));
}

#[test]
fn validate_standard_bank() {
    persona()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard bank (70 questions)"))
        .stdout(predicate::str::contains("Question bank valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bank.toml");
    std::fs::write(
        &bank,
        r#"
[[questions]]
id = 1
section = "riasec"
trait = "realistic"
text = "I like tools."
reverse = true
"#,
    )
    .unwrap();

    persona()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] WARNING: reverse flag has no effect"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    persona()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    persona()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created question-bank.toml"))
        .stdout(predicate::str::contains("Created answers.json"));

    let answers = std::fs::read_to_string(dir.path().join("answers.json")).unwrap();
    let answers: serde_json::Value = serde_json::from_str(&answers).unwrap();
    assert_eq!(answers.as_object().unwrap().len(), 70);
    assert_eq!(answers["70"], 3);

    // the generated files work together
    persona()
        .current_dir(dir.path())
        .args(["analyze", "--answers", "answers.json", "--bank", "question-bank.toml"])
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    persona()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    persona()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    persona()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Multi-instrument personality questionnaire scoring",
        ));
}

#[test]
fn version_output() {
    persona()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("persona"));
}
