//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use intervue_core::report::InterviewReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn score_label(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else if score >= 40 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Generate an HTML report.
pub fn generate_html(report: &InterviewReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>intervue report — {}</title>\n",
        html_escape(&report.profile.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Interview Report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Candidate: <strong>{}</strong> | {} | {} | {}</p>\n",
        html_escape(&report.profile.name),
        html_escape(&report.profile.email),
        html_escape(&report.profile.position),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Overall score
    html.push_str("<section class=\"overall\">\n");
    html.push_str(&format!(
        "<div class=\"score\">{}</div>\n<div class=\"label\">{}</div>\n",
        report.overall_score,
        score_label(report.overall_score)
    ));
    html.push_str("</section>\n");

    // Stage summary table
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Stages</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Stage</th><th>Score</th><th>Questions</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for stage in &report.stages {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(stage.stage.title()),
            stage.score,
            stage.questions.len(),
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Per-stage detail
    for stage in &report.stages {
        html.push_str("<section class=\"stage\">\n");
        html.push_str(&format!(
            "<h2>{} — {}</h2>\n",
            html_escape(stage.stage.title()),
            stage.score
        ));
        if stage.questions.is_empty() {
            html.push_str("<p class=\"empty\">No answers recorded for this stage.</p>\n");
        } else {
            html.push_str("<table class=\"results-table\">\n");
            html.push_str(
                "<thead><tr><th>Question</th><th>Answer</th><th>Score</th><th>Feedback</th></tr></thead>\n",
            );
            html.push_str("<tbody>\n");
            for review in &stage.questions {
                let row_class = if review.score >= 60 { "pass" } else { "fail" };
                html.push_str(&format!(
                    "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    row_class,
                    html_escape(&review.question),
                    html_escape(&review.answer),
                    review.score,
                    html_escape(&review.feedback),
                ));
            }
            html.push_str("</tbody></table>\n");
        }
        html.push_str("</section>\n");
    }

    // Assessment lists
    html.push_str("<section class=\"assessment\">\n");
    for (title, items) in [
        ("Strengths", &report.strengths),
        ("Weaknesses", &report.weaknesses),
        ("Recommendations", &report.recommendations),
    ] {
        html.push_str(&format!("<h2>{title}</h2>\n<ul>\n"));
        for item in items {
            html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");

    html
}

/// Generate an HTML report and write it to `path`.
pub fn write_html_report(report: &InterviewReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .map_err(|e| anyhow::anyhow!("failed to write HTML report to {}: {e}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem auto; max-width: 960px; color: #1a1a2e; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #666; }
.overall { text-align: center; margin: 2rem 0; }
.overall .score { font-size: 4rem; font-weight: 700; }
.overall .label { text-transform: uppercase; letter-spacing: 0.1em; color: #666; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #ddd; padding: 0.5rem 0.75rem; text-align: left; vertical-align: top; }
th { background: #f4f4f8; }
tr.pass td:nth-child(3) { color: #1a7a3a; font-weight: 600; }
tr.fail td:nth-child(3) { color: #b02a2a; font-weight: 600; }
.empty { color: #888; font-style: italic; }
.raw-data pre { background: #f4f4f8; padding: 1rem; overflow-x: auto; font-size: 0.85rem; }
"#;
