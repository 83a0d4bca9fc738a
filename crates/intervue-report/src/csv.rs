//! CSV report renderer.

use std::path::Path;

use anyhow::{Context, Result};

use intervue_core::report::InterviewReport;

/// Quote a cell, doubling embedded quotes.
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Free-text fields swap commas for semicolons so spreadsheet imports that
/// ignore quoting still line up.
fn free_text(cell: &str) -> String {
    quote(&cell.replace(',', ";"))
}

/// Render a report as CSV.
pub fn render_csv(report: &InterviewReport) -> String {
    let mut rows: Vec<String> = Vec::new();
    let mut push_row = |cells: &[String]| {
        rows.push(cells.join(","));
    };

    push_row(&[quote("Interview Report")]);
    push_row(&[
        quote("Date"),
        quote(&report.created_at.format("%Y-%m-%d").to_string()),
    ]);
    push_row(&[quote("Candidate"), quote(&report.profile.name)]);
    push_row(&[quote("Email"), quote(&report.profile.email)]);
    push_row(&[quote("Position"), quote(&report.profile.position)]);
    push_row(&[quote("Overall Score"), quote(&report.overall_score.to_string())]);
    push_row(&[]);

    for stage in &report.stages {
        push_row(&[
            quote(&format!("Stage: {}", stage.stage.title())),
            quote(&format!("Score: {}", stage.score)),
        ]);
        push_row(&[
            quote("Question"),
            quote("Answer"),
            quote("Score"),
            quote("Feedback"),
        ]);
        for review in &stage.questions {
            push_row(&[
                quote(&review.question),
                free_text(&review.answer),
                quote(&review.score.to_string()),
                free_text(&review.feedback),
            ]);
        }
        push_row(&[]);
    }

    push_row(&[quote("Strengths")]);
    for strength in &report.strengths {
        push_row(&[quote(strength)]);
    }
    push_row(&[]);

    push_row(&[quote("Weaknesses")]);
    for weakness in &report.weaknesses {
        push_row(&[quote(weakness)]);
    }
    push_row(&[]);

    push_row(&[quote("Recommendations")]);
    for recommendation in &report.recommendations {
        push_row(&[quote(recommendation)]);
    }

    rows.join("\n")
}

/// Render a report and write it to `path`.
pub fn write_csv_report(report: &InterviewReport, path: &Path) -> Result<()> {
    let csv = render_csv(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use intervue_core::model::Stage;
    use intervue_core::report::{QuestionReview, StageSummary, UserProfile};
    use uuid::Uuid;

    fn sample_report() -> InterviewReport {
        InterviewReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            profile: UserProfile::default(),
            stages: vec![StageSummary {
                stage: Stage::Behavioral,
                score: 72,
                questions: vec![QuestionReview {
                    question: "Question 1".into(),
                    answer: "I read, build, and reflect.".into(),
                    score: 72,
                    feedback: "Good answer, but could be more detailed in some areas.".into(),
                }],
            }],
            overall_score: 72,
            strengths: vec!["Strong communication and behavioral skills".into()],
            weaknesses: vec!["Practice more coding challenges".into()],
            recommendations: vec!["Consider mock interviews with peers or mentors.".into()],
        }
    }

    #[test]
    fn csv_has_header_and_sections() {
        let csv = render_csv(&sample_report());
        assert!(csv.starts_with("\"Interview Report\""));
        assert!(csv.contains("\"Candidate\",\"Candidate\""));
        assert!(csv.contains("\"Overall Score\",\"72\""));
        assert!(csv.contains("\"Stage: Behavioral Interview\",\"Score: 72\""));
        assert!(csv.contains("\"Strengths\""));
        assert!(csv.contains("\"Recommendations\""));
    }

    #[test]
    fn free_text_commas_become_semicolons() {
        let csv = render_csv(&sample_report());
        assert!(csv.contains("\"I read; build; and reflect.\""));
        assert!(csv.contains("\"Good answer; but could be more detailed in some areas.\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut report = sample_report();
        report.stages[0].questions[0].answer = "I said \"ship it\" too early".into();
        let csv = render_csv(&report);
        assert!(csv.contains("\"I said \"\"ship it\"\" too early\""));
    }

    #[test]
    fn writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/interview.csv");
        write_csv_report(&sample_report(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Interview Report"));
    }
}
