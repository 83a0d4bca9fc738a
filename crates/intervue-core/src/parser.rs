//! TOML catalog parser.
//!
//! Loads question/challenge catalogs from TOML files and directories, and
//! validates them for the problems that would otherwise surface mid-session.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    Catalog, CodeChallenge, Difficulty, MultipleChoiceOption, Question, QuestionKind, Stage,
    StarterCode, TestCase,
};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    challenges: Vec<TomlChallenge>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    kind: String,
    stage: String,
    #[serde(default)]
    time_limit_secs: Option<u64>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    options: Vec<TomlOption>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    id: String,
    text: String,
    #[serde(default)]
    is_correct: bool,
}

#[derive(Debug, Deserialize)]
struct TomlChallenge {
    id: String,
    title: String,
    description: String,
    difficulty: String,
    time_limit_secs: u64,
    #[serde(default)]
    starter_code: TomlStarterCode,
    #[serde(default)]
    test_cases: Vec<TomlTestCase>,
    #[serde(default)]
    hints: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlStarterCode {
    #[serde(default)]
    javascript: String,
    #[serde(default)]
    typescript: String,
    #[serde(default)]
    java: String,
    #[serde(default)]
    golang: String,
}

#[derive(Debug, Deserialize)]
struct TomlTestCase {
    input: String,
    expected_output: String,
    #[serde(default)]
    description: String,
}

fn parse_difficulty(s: &str) -> Result<Difficulty> {
    match s.to_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => anyhow::bail!("unknown difficulty: {other}"),
    }
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing and for the
/// embedded standard catalog).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {e}", q.id))?;
            let stage: Stage = q
                .stage
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {e}", q.id))?;
            let difficulty = q
                .difficulty
                .map(|d| parse_difficulty(&d))
                .transpose()
                .with_context(|| format!("question '{}'", q.id))?;

            Ok(Question {
                id: q.id,
                text: q.text,
                kind,
                stage,
                time_limit_secs: q.time_limit_secs,
                keywords: q.keywords,
                options: q
                    .options
                    .into_iter()
                    .map(|o| MultipleChoiceOption {
                        id: o.id,
                        text: o.text,
                        is_correct: o.is_correct,
                    })
                    .collect(),
                difficulty,
                category: q.category,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let challenges = parsed
        .challenges
        .into_iter()
        .map(|c| {
            let difficulty =
                parse_difficulty(&c.difficulty).with_context(|| format!("challenge '{}'", c.id))?;
            Ok(CodeChallenge {
                id: c.id,
                title: c.title,
                description: c.description,
                difficulty,
                time_limit_secs: c.time_limit_secs,
                starter_code: StarterCode {
                    javascript: c.starter_code.javascript,
                    typescript: c.starter_code.typescript,
                    java: c.starter_code.java,
                    golang: c.starter_code.golang,
                },
                test_cases: c
                    .test_cases
                    .into_iter()
                    .map(|t| TestCase {
                        input: t.input,
                        expected_output: t.expected_output,
                        description: t.description,
                    })
                    .collect(),
                hints: c.hints,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        questions,
        challenges,
    })
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question or challenge ID (if applicable).
    pub entry_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate IDs across questions and challenges
    let mut seen_ids = std::collections::HashSet::new();
    for id in catalog
        .questions
        .iter()
        .map(|q| &q.id)
        .chain(catalog.challenges.iter().map(|c| &c.id))
    {
        if !seen_ids.insert(id) {
            warnings.push(ValidationWarning {
                entry_id: Some(id.clone()),
                message: format!("duplicate entry ID: {id}"),
            });
        }
    }

    for question in &catalog.questions {
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                entry_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }

        match question.kind {
            QuestionKind::MultipleChoice => {
                let correct = question.options.iter().filter(|o| o.is_correct).count();
                if question.options.is_empty() {
                    warnings.push(ValidationWarning {
                        entry_id: Some(question.id.clone()),
                        message: "multiple-choice question has no options".into(),
                    });
                } else if correct != 1 {
                    warnings.push(ValidationWarning {
                        entry_id: Some(question.id.clone()),
                        message: format!(
                            "multiple-choice question has {correct} options flagged correct, expected 1"
                        ),
                    });
                }
            }
            QuestionKind::Text | QuestionKind::Voice => {
                if question.keywords.is_empty() {
                    warnings.push(ValidationWarning {
                        entry_id: Some(question.id.clone()),
                        message: "no scoring keywords; answers will score a neutral keyword match"
                            .into(),
                    });
                }
            }
            QuestionKind::Code => {
                warnings.push(ValidationWarning {
                    entry_id: Some(question.id.clone()),
                    message: "code questions belong in [[challenges]], not [[questions]]".into(),
                });
            }
        }
    }

    for challenge in &catalog.challenges {
        if challenge.test_cases.is_empty() {
            warnings.push(ValidationWarning {
                entry_id: Some(challenge.id.clone()),
                message: "challenge has no test cases; correctness will always score 0".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[catalog]
id = "starter"
name = "Starter Catalog"
description = "A small catalog for testing"

[[questions]]
id = "beh-1"
text = "How do you stay updated with industry trends?"
kind = "voice"
stage = "behavioral"
time_limit_secs = 120
keywords = ["learning", "research", "community"]
difficulty = "easy"
category = "Professional Development"

[[questions]]
id = "tech-1"
text = "What is the time complexity of binary search?"
kind = "multiple-choice"
stage = "technical"
time_limit_secs = 60
difficulty = "easy"

[[questions.options]]
id = "a"
text = "O(n)"

[[questions.options]]
id = "b"
text = "O(log n)"
is_correct = true

[[challenges]]
id = "code-1"
title = "Two Sum"
description = "Return indices of the two numbers adding to target."
difficulty = "easy"
time_limit_secs = 900
hints = ["Use a hash map to store seen numbers"]

[challenges.starter_code]
javascript = "function twoSum(nums, target) {\n}\n"

[[challenges.test_cases]]
input = "[2, 7, 11, 15], target = 9"
expected_output = "[0, 1]"
description = "Basic case"
"#;

    #[test]
    fn parse_valid_toml() {
        let catalog = parse_catalog_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(catalog.id, "starter");
        assert_eq!(catalog.questions.len(), 2);
        assert_eq!(catalog.challenges.len(), 1);
        assert_eq!(catalog.questions[0].kind, QuestionKind::Voice);
        assert_eq!(catalog.questions[0].stage, Stage::Behavioral);
        assert_eq!(catalog.questions[1].correct_option().unwrap().id, "b");
        assert_eq!(catalog.challenges[0].test_cases.len(), 1);
        assert!(catalog.challenges[0]
            .starter_code
            .javascript
            .contains("twoSum"));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[catalog]
id = "minimal"
name = "Minimal"

[[questions]]
id = "q1"
text = "Describe your ideal work environment."
kind = "text"
stage = "final"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!(catalog.description.is_empty());
        assert!(catalog.questions[0].keywords.is_empty());
        assert!(catalog.questions[0].time_limit_secs.is_none());
        assert!(catalog.challenges.is_empty());
    }

    #[test]
    fn unknown_stage_is_an_error() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
text = "Anything"
kind = "text"
stage = "onsite"
"#;
        let result = parse_catalog_str(toml, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("unknown stage"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_catalog_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[catalog]
id = "dupes"
name = "Dupes"

[[questions]]
id = "same"
text = "First"
kind = "text"
stage = "behavioral"
keywords = ["one"]

[[questions]]
id = "same"
text = "Second"
kind = "text"
stage = "behavioral"
keywords = ["two"]
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_choice_without_correct_option() {
        let toml = r#"
[catalog]
id = "mc"
name = "MC"

[[questions]]
id = "q1"
text = "Pick one"
kind = "multiple-choice"
stage = "technical"

[[questions.options]]
id = "a"
text = "First"

[[questions.options]]
id = "b"
text = "Second"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("flagged correct")));
    }

    #[test]
    fn validate_missing_keywords_and_test_cases() {
        let toml = r#"
[catalog]
id = "thin"
name = "Thin"

[[questions]]
id = "q1"
text = "Tell me about yourself."
kind = "voice"
stage = "behavioral"

[[challenges]]
id = "c1"
title = "Empty"
description = "No cases"
difficulty = "easy"
time_limit_secs = 300
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("keywords")));
        assert!(warnings.iter().any(|w| w.message.contains("no test cases")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("catalog.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let catalogs = load_catalog_directory(dir.path()).unwrap();
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].id, "starter");
    }
}
