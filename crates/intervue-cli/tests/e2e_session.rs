//! End-to-end session tests driving the full pipeline: catalog → session →
//! evaluators → report → renderers.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use intervue_core::model::Stage;
use intervue_core::report::InterviewReport;

fn intervue() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("intervue").unwrap()
}

/// Scripted answers for every entry of the built-in standard catalog.
const FULL_SCRIPT: &str = r#"
[[answers]]
question = "beh-1"
text = "I stay current through constant learning, reading papers, following community discussions, and taking courses. Research into new tooling is part of my weekly routine."
duration_secs = 35

[[answers]]
question = "beh-2"
text = "I have eight years of experience. My education is in computer science, and my skills span backend services and infrastructure, with achievements in latency reduction."
duration_secs = 40

[[answers]]
question = "beh-3"
text = "A migration was failing under load. Through problem-solving and resilience we found a solution, and the outcome was a stable rollout with zero data loss."
duration_secs = 45

[[answers]]
question = "beh-4"
text = "I rely on prioritization and balance. Coping with pressure means breaking work down, and stress management through routine keeps me steady."
duration_secs = 30

[[answers]]
question = "beh-5"
text = "I led a team through an incident with initiative and guidance. My leadership focused on clear ownership, and the results spoke for themselves."
duration_secs = 38

[[answers]]
question = "tech-1"
choice = "a"

[[answers]]
question = "tech-2"
text = "A closure is a function that captures its lexical scope, enabling encapsulation and private state."

[[answers]]
question = "tech-3"
choice = "b"

[[answers]]
question = "tech-4"
choice = "b"

[[answers]]
question = "tech-5"
text = "Relational databases enforce a schema and favor structure, while NoSQL trades that for flexibility and horizontal scalability."

[[answers]]
question = "code-1"
language = "javascript"
code = """
// look up each complement as we scan
function twoSum(nums, target) {
  const seen = new Map();
  for (let i = 0; i < nums.length; i++) {
    const complement = target - nums[i];
    if (seen.has(complement)) return [seen.get(complement), i];
    seen.set(nums[i], i);
  }
  return [];
}
"""

[[answers]]
question = "code-2"
language = "javascript"
code = """
function reverseString(s) {
  let left = 0;
  let right = s.length - 1;
  while (left < right) {
    const tmp = s[left];
    s[left] = s[right];
    s[right] = tmp;
    left++;
    right--;
  }
}
"""

[[answers]]
question = "final-1"
text = "In five years I see career growth toward staff scope. My goals center on development of others and a clear technical vision."
duration_secs = 32

[[answers]]
question = "final-2"
text = "Based on market research I know my value, and I am open to negotiation within the posted band."
duration_secs = 25

[[answers]]
question = "final-3"
text = "Balance comes from boundaries. Protecting health keeps my productivity sustainable over the long run."
duration_secs = 24

[[answers]]
question = "final-4"
text = "A culture of collaboration matters most to me. My preferences are an environment with honest feedback and room to focus."
duration_secs = 28

[[answers]]
question = "final-5"
text = "My unique value is the combination of skills across the stack and a track record of contribution; I am a strong fit for this team."
duration_secs = 30
"#;

fn find_report_json(dir: &std::path::Path) -> std::path::PathBuf {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "json"))
        .expect("a report JSON should have been written")
}

#[test]
fn scripted_session_over_standard_catalog() {
    let dir = TempDir::new().unwrap();
    let script_path = dir.path().join("answers.toml");
    std::fs::write(&script_path, FULL_SCRIPT).unwrap();
    let output = dir.path().join("results");

    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--script")
        .arg(&script_path)
        .arg("--seed")
        .arg("7")
        .arg("--run-delay-ms")
        .arg("0")
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("all")
        .assert()
        .success()
        .stderr(predicate::str::contains("Behavioral Interview"))
        .stderr(predicate::str::contains("Overall score"));

    let report = InterviewReport::load_json(&find_report_json(&output)).unwrap();

    assert_eq!(report.stages.len(), 4);
    assert_eq!(report.stage(Stage::Behavioral).unwrap().questions.len(), 5);
    assert_eq!(report.stage(Stage::Technical).unwrap().questions.len(), 5);
    assert_eq!(report.stage(Stage::Coding).unwrap().questions.len(), 2);
    assert_eq!(report.stage(Stage::Final).unwrap().questions.len(), 5);
    assert!(report.overall_score <= 100);
    // Every stage produced some assessment text.
    assert_eq!(report.strengths.len() + report.weaknesses.len(), 4);
    assert!(!report.recommendations.is_empty());

    // The multiple-choice answers in the script are all correct.
    let technical = report.stage(Stage::Technical).unwrap();
    assert!(technical
        .questions
        .iter()
        .filter(|q| q.feedback == "Correct!")
        .count()
        >= 3);

    // Renderers ran alongside the JSON.
    let csv = std::fs::read_dir(&output)
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.path().extension().is_some_and(|ext| ext == "csv"));
    let html = std::fs::read_dir(&output)
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.path().extension().is_some_and(|ext| ext == "html"));
    assert!(csv && html);
}

#[test]
fn seeded_runs_produce_identical_coding_scores() {
    let mut scores = Vec::new();
    for _ in 0..2 {
        let dir = TempDir::new().unwrap();
        let script_path = dir.path().join("answers.toml");
        std::fs::write(&script_path, FULL_SCRIPT).unwrap();
        let output = dir.path().join("results");

        intervue()
            .current_dir(dir.path())
            .arg("run")
            .arg("--script")
            .arg(&script_path)
            .arg("--seed")
            .arg("42")
            .arg("--run-delay-ms")
            .arg("0")
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        let report = InterviewReport::load_json(&find_report_json(&output)).unwrap();
        scores.push(report.stage(Stage::Coding).unwrap().score);
    }
    assert_eq!(scores[0], scores[1]);
}

#[test]
fn interactive_session_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let catalog = r#"
[catalog]
id = "tiny"
name = "Tiny"

[[questions]]
id = "tech-1"
text = "Which HTTP method is idempotent?"
kind = "multiple-choice"
stage = "technical"

[[questions.options]]
id = "a"
text = "POST"

[[questions.options]]
id = "b"
text = "GET"
is_correct = true
"#;
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, catalog).unwrap();
    let output = dir.path().join("results");

    // ":back" at the first question is a no-op, then the real choice.
    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--output")
        .arg(&output)
        .write_stdin(":back\nb\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Correct!"));

    let report = InterviewReport::load_json(&find_report_json(&output)).unwrap();
    assert_eq!(report.stage(Stage::Technical).unwrap().score, 100);
}

#[test]
fn script_missing_an_answer_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let script_path = dir.path().join("answers.toml");
    // Only one answer; the second behavioral question has no entry.
    std::fs::write(
        &script_path,
        r#"
[[answers]]
question = "beh-1"
text = "Just the one answer."
"#,
    )
    .unwrap();

    intervue()
        .current_dir(dir.path())
        .arg("run")
        .arg("--script")
        .arg(&script_path)
        .arg("--run-delay-ms")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry for question"));
}
