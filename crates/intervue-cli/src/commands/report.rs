//! The `intervue report` command — re-render a saved report JSON.

use std::path::PathBuf;

use anyhow::Result;

use intervue_core::report::InterviewReport;
use intervue_report::{write_csv_report, write_html_report};

pub fn execute(input: PathBuf, format: String, output: PathBuf) -> Result<()> {
    let report = InterviewReport::load_json(&input)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report")
        .to_string();

    std::fs::create_dir_all(&output)?;

    let formats: Vec<&str> = if format == "all" {
        vec!["csv", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "csv" => {
                let path = output.join(format!("{stem}.csv"));
                write_csv_report(&report, &path)?;
                println!("CSV report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("{stem}.html"));
                write_html_report(&report, &path)?;
                println!("HTML report: {}", path.display());
            }
            other => {
                anyhow::bail!("unknown format: {other}");
            }
        }
    }

    Ok(())
}
