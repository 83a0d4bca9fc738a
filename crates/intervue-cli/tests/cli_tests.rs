//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn intervue() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("intervue").unwrap()
}

#[test]
fn help_output() {
    intervue()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Staged interview practice"));
}

#[test]
fn version_output() {
    intervue()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intervue"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created intervue.toml"))
        .stdout(predicate::str::contains("Created catalogs/standard.toml"));

    assert!(dir.path().join("intervue.toml").exists());
    assert!(dir.path().join("catalogs/standard.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_standard_catalog() {
    let dir = TempDir::new().unwrap();
    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    intervue()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs/standard.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard: 15 questions, 2 challenges"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    intervue()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    intervue()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let catalog = r#"
[catalog]
id = "thin"
name = "Thin"

[[questions]]
id = "q1"
text = "Tell me about yourself."
kind = "voice"
stage = "behavioral"
"#;
    let path = dir.path().join("thin.toml");
    std::fs::write(&path, catalog).unwrap();

    intervue()
        .arg("validate")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warnings"))
        .stdout(predicate::str::contains("keywords"));
}

#[test]
fn validate_nonexistent_file() {
    intervue()
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn report_renders_saved_json() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report-test.json");
    std::fs::write(&report_path, SAMPLE_REPORT_JSON).unwrap();

    intervue()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .arg("--format")
        .arg("all")
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV report"))
        .stdout(predicate::str::contains("HTML report"));

    let csv = std::fs::read_to_string(dir.path().join("report-test.csv")).unwrap();
    assert!(csv.contains("Interview Report"));
    assert!(csv.contains("Overall Score"));

    let html = std::fs::read_to_string(dir.path().join("report-test.html")).unwrap();
    assert!(html.contains("Behavioral Interview"));
}

#[test]
fn report_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report-test.json");
    std::fs::write(&report_path, SAMPLE_REPORT_JSON).unwrap();

    intervue()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .arg("--format")
        .arg("docx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn report_nonexistent_input() {
    intervue()
        .arg("report")
        .arg("--input")
        .arg("no_such_report.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

/// A minimal valid report JSON matching the `InterviewReport` schema.
const SAMPLE_REPORT_JSON: &str = r#"{
    "id": "00000000-0000-0000-0000-000000000000",
    "created_at": "2026-01-01T00:00:00Z",
    "profile": {
        "name": "Candidate",
        "email": "candidate@example.com",
        "position": "Software Engineer"
    },
    "stages": [
        {
            "stage": "behavioral",
            "score": 72,
            "questions": [
                {
                    "question": "Question 1",
                    "answer": "I read and build things.",
                    "score": 72,
                    "feedback": "Good answer, but could be more detailed in some areas."
                }
            ]
        },
        {
            "stage": "technical",
            "score": 100,
            "questions": [
                {
                    "question": "Question 1",
                    "answer": "b",
                    "score": 100,
                    "feedback": "Correct!"
                }
            ]
        },
        {
            "stage": "coding",
            "score": 50,
            "questions": []
        },
        {
            "stage": "final",
            "score": 80,
            "questions": []
        }
    ],
    "overall_score": 76,
    "strengths": ["Strong communication and behavioral skills"],
    "weaknesses": ["Practice more coding challenges"],
    "recommendations": ["Good foundation. Practice more in areas where you scored below 70."]
}"#;
