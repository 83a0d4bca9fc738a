//! The `intervue init` command.

use anyhow::Result;

use super::STANDARD_CATALOG;

pub fn execute() -> Result<()> {
    // Create intervue.toml
    if std::path::Path::new("intervue.toml").exists() {
        println!("intervue.toml already exists, skipping.");
    } else {
        std::fs::write("intervue.toml", SAMPLE_CONFIG)?;
        println!("Created intervue.toml");
    }

    // Create the standard catalog
    std::fs::create_dir_all("catalogs")?;
    let catalog_path = std::path::Path::new("catalogs/standard.toml");
    if catalog_path.exists() {
        println!("catalogs/standard.toml already exists, skipping.");
    } else {
        std::fs::write(catalog_path, STANDARD_CATALOG)?;
        println!("Created catalogs/standard.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit intervue.toml with your name and position");
    println!("  2. Run: intervue validate --catalog catalogs/standard.toml");
    println!("  3. Run: intervue run --catalog catalogs/standard.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# intervue configuration

catalog = "catalogs/standard.toml"
output_dir = "./intervue-results"

[profile]
name = "Candidate"
email = "candidate@example.com"
position = "Software Engineer"

[speech]
# "none" falls back to typed answers; "mock" is for tests.
provider = "none"
rate = 1.0
pitch = 1.0
volume = 1.0

[session]
behavioral_questions = 5
technical_questions = 5
coding_challenges = 2
final_questions = 5
"#;
