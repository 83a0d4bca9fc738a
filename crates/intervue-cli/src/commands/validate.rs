//! The `intervue validate` command.

use std::path::PathBuf;

use anyhow::Result;

use intervue_core::parser;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalogs = if catalog_path.is_dir() {
        parser::load_catalog_directory(&catalog_path)?
    } else {
        vec![parser::parse_catalog(&catalog_path)?]
    };

    anyhow::ensure!(!catalogs.is_empty(), "no catalog files found");

    let mut total_warnings = 0usize;
    for catalog in &catalogs {
        let warnings = parser::validate_catalog(catalog);
        println!(
            "{}: {} questions, {} challenges, {} warnings",
            catalog.id,
            catalog.questions.len(),
            catalog.challenges.len(),
            warnings.len()
        );
        for warning in &warnings {
            match &warning.entry_id {
                Some(id) => println!("  [{id}] {}", warning.message),
                None => println!("  {}", warning.message),
            }
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All catalogs valid.");
    }

    Ok(())
}
