//! The `intervue run` command.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use intervue_core::error::SpeechError;
use intervue_core::model::{
    Catalog, CodeChallenge, ProgrammingLanguage, Question, QuestionKind, Stage,
};
use intervue_core::parser;
use intervue_core::report::{build_report, InterviewReport};
use intervue_core::session::{InterviewSession, SessionItem, SubmissionInput};
use intervue_core::traits::{CodeExecutor, ExecutionRequest, SpeakRequest, SpeechProvider};
use intervue_report::{write_csv_report, write_html_report};
use intervue_runner::SimulatedExecutor;
use intervue_speech::config::{load_config_from, SpeechSettings};
use intervue_speech::create_provider;

use super::STANDARD_CATALOG;

/// Sentinel typed at a question prompt to step back one question.
const BACK_COMMAND: &str = ":back";

/// Sentinel line ending a code submission.
const CODE_TERMINATOR: &str = ".";

/// One scripted answer, keyed by question id.
#[derive(Debug, Deserialize)]
struct ScriptedAnswer {
    question: String,
    /// Typed or transcribed answer text.
    #[serde(default)]
    text: Option<String>,
    /// Present when `text` is a transcript of a spoken answer.
    #[serde(default)]
    duration_secs: Option<u32>,
    /// Selected option id for multiple-choice questions.
    #[serde(default)]
    choice: Option<String>,
    /// Submitted source for coding challenges.
    #[serde(default)]
    code: Option<String>,
    /// Language of the submitted source (default javascript).
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnswerScript {
    #[serde(default)]
    answers: Vec<ScriptedAnswer>,
}

/// Owned copy of the current session item, so the session can be mutated
/// while the prompt is on screen.
enum Item {
    Question(Question),
    Challenge(CodeChallenge),
}

pub async fn execute(
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    script_path: Option<PathBuf>,
    seed: Option<u64>,
    run_delay_ms: u64,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let catalog = load_catalog(catalog_path.or(config.catalog.clone()))?;
    for warning in parser::validate_catalog(&catalog) {
        match &warning.entry_id {
            Some(id) => eprintln!("Warning [{id}]: {}", warning.message),
            None => eprintln!("Warning: {}", warning.message),
        }
    }

    let speech = create_provider(&config.speech.provider)?;
    let mut executor = SimulatedExecutor::new().with_delay(Duration::from_millis(run_delay_ms));
    if let Some(seed) = seed {
        executor = executor.with_seed(seed);
    }

    let script = script_path.map(|p| load_script(&p)).transpose()?;

    let mut session = InterviewSession::new(catalog, config.session.to_plan())?;
    eprintln!("intervue — {} questions ahead. Good luck!\n", plan_total(&session));

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut last_stage: Option<Stage> = None;

    while !session.is_complete() {
        let item = match session.current_item() {
            Some(SessionItem::Question(q)) => Item::Question(q.clone()),
            Some(SessionItem::Challenge(c)) => Item::Challenge(c.clone()),
            None => break,
        };

        let stage = session.current_stage();
        if last_stage != Some(stage) {
            eprintln!("=== {} ===\n", stage.title());
            last_stage = Some(stage);
        }

        let index = session.current_question_index();
        let total = session.stage_len(stage);

        let input = match &item {
            Item::Question(question) => {
                eprintln!("Question {} of {}: {}", index + 1, total, question.text);
                match gather_question_input(
                    question,
                    script.as_ref(),
                    &mut reader,
                    speech.as_ref(),
                    &config.speech,
                )
                .await?
                {
                    Some(input) => input,
                    None => {
                        session.previous_question();
                        continue;
                    }
                }
            }
            Item::Challenge(challenge) => {
                eprintln!(
                    "Challenge {} of {}: {} [{}]",
                    index + 1,
                    total,
                    challenge.title,
                    challenge.difficulty
                );
                eprintln!("{}\n", challenge.description);
                let (source, language) =
                    gather_code_input(challenge, script.as_ref(), &mut reader)?;

                eprintln!("Running tests...");
                let execution = executor
                    .execute(&ExecutionRequest {
                        source: source.clone(),
                        language,
                        test_cases: challenge.test_cases.clone(),
                    })
                    .await?;
                for line in &execution.output {
                    eprintln!("  {line}");
                }
                SubmissionInput::Code { source, execution }
            }
        };

        let answer = session.submit(input)?;
        eprintln!("  Score {}: {}\n", answer.score, answer.feedback);
    }

    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("session ended without an outcome"))?;
    let report = build_report(&outcome, config.profile.clone());

    print_summary(&report);
    save_reports(&report, &output.unwrap_or(config.output_dir), &format)?;

    Ok(())
}

fn plan_total(session: &InterviewSession) -> usize {
    Stage::ALL.iter().map(|&s| session.stage_len(s)).sum()
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => parser::parse_catalog(&path),
        None => parser::parse_catalog_str(STANDARD_CATALOG, Path::new("<built-in>")),
    }
}

fn load_script(path: &Path) -> Result<HashMap<String, ScriptedAnswer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer script: {}", path.display()))?;
    let script: AnswerScript = toml::from_str(&content)
        .with_context(|| format!("failed to parse answer script: {}", path.display()))?;

    let mut map = HashMap::new();
    for answer in script.answers {
        let id = answer.question.clone();
        if map.insert(id.clone(), answer).is_some() {
            bail!("answer script has multiple entries for question '{id}'");
        }
    }
    Ok(map)
}

/// Obtain input for a non-coding question. `None` means the candidate asked
/// to go back one question.
async fn gather_question_input(
    question: &Question,
    script: Option<&HashMap<String, ScriptedAnswer>>,
    reader: &mut impl BufRead,
    speech: &dyn SpeechProvider,
    settings: &SpeechSettings,
) -> Result<Option<SubmissionInput>> {
    if let Some(script) = script {
        return scripted_question_input(question, script).map(Some);
    }

    match question.kind {
        QuestionKind::MultipleChoice => {
            for option in &question.options {
                eprintln!("  [{}] {}", option.id, option.text);
            }
            let line = prompt_line(reader, "Your choice: ")?;
            if line == BACK_COMMAND {
                return Ok(None);
            }
            Ok(Some(SubmissionInput::Choice(line)))
        }
        QuestionKind::Voice if speech.support().stt => {
            // Read the question aloud when synthesis is there; a playback
            // failure is not worth aborting the session over.
            let mut request = SpeakRequest::new(question.text.clone());
            request.rate = settings.rate;
            request.pitch = settings.pitch;
            request.volume = settings.volume;
            if let Err(e) = speech.speak(&request).await {
                tracing::debug!("question playback failed: {e}");
            }

            eprintln!("Listening... (speak your answer)");
            match speech.listen().await {
                Ok(response) => {
                    eprintln!("Heard: {}", response.transcript);
                    Ok(Some(SubmissionInput::Voice {
                        transcript: response.transcript,
                        duration_secs: response.duration_secs,
                    }))
                }
                Err(e) => {
                    if e.should_fall_back_to_text() {
                        eprintln!("Voice capture unavailable ({e}); type your answer instead.");
                    } else if matches!(e, SpeechError::NoSpeechDetected) {
                        eprintln!("No speech detected; type your answer instead.");
                    } else {
                        eprintln!("Voice capture canceled; type your answer instead.");
                    }
                    typed_answer(reader)
                }
            }
        }
        _ => typed_answer(reader),
    }
}

fn typed_answer(reader: &mut impl BufRead) -> Result<Option<SubmissionInput>> {
    let line = prompt_line(reader, "Your answer: ")?;
    if line == BACK_COMMAND {
        return Ok(None);
    }
    Ok(Some(SubmissionInput::Text(line)))
}

fn scripted_question_input(
    question: &Question,
    script: &HashMap<String, ScriptedAnswer>,
) -> Result<SubmissionInput> {
    let scripted = script
        .get(&question.id)
        .with_context(|| format!("answer script has no entry for question '{}'", question.id))?;

    match question.kind {
        QuestionKind::MultipleChoice => {
            let choice = scripted
                .choice
                .clone()
                .with_context(|| format!("script entry '{}' needs a choice", question.id))?;
            Ok(SubmissionInput::Choice(choice))
        }
        QuestionKind::Voice | QuestionKind::Text => {
            let text = scripted
                .text
                .clone()
                .with_context(|| format!("script entry '{}' needs text", question.id))?;
            match scripted.duration_secs {
                Some(duration_secs) if question.kind == QuestionKind::Voice => {
                    Ok(SubmissionInput::Voice {
                        transcript: text,
                        duration_secs,
                    })
                }
                _ => Ok(SubmissionInput::Text(text)),
            }
        }
        QuestionKind::Code => {
            bail!("question '{}' has kind code; use a challenge entry", question.id)
        }
    }
}

fn gather_code_input(
    challenge: &CodeChallenge,
    script: Option<&HashMap<String, ScriptedAnswer>>,
    reader: &mut impl BufRead,
) -> Result<(String, ProgrammingLanguage)> {
    if let Some(script) = script {
        let scripted = script.get(&challenge.id).with_context(|| {
            format!("answer script has no entry for challenge '{}'", challenge.id)
        })?;
        let source = scripted
            .code
            .clone()
            .with_context(|| format!("script entry '{}' needs code", challenge.id))?;
        let language = match &scripted.language {
            Some(l) => l
                .parse()
                .map_err(|e: String| anyhow::anyhow!("script entry '{}': {e}", challenge.id))?,
            None => ProgrammingLanguage::JavaScript,
        };
        return Ok((source, language));
    }

    let language = ProgrammingLanguage::JavaScript;
    let starter = challenge.starter_code.for_language(language);
    if !starter.is_empty() {
        eprintln!("Starter code ({language}):\n{starter}");
    }
    eprintln!("Enter your solution; finish with a single '{CODE_TERMINATOR}' line:");

    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if read == 0 || trimmed == CODE_TERMINATOR {
            break;
        }
        lines.push(trimmed.to_string());
    }
    Ok((lines.join("\n"), language))
}

fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        bail!("stdin closed before the session finished");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn print_summary(report: &InterviewReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Stage", "Score", "Questions"]);

    for stage in &report.stages {
        table.add_row(vec![
            Cell::new(stage.stage.title()),
            Cell::new(stage.score),
            Cell::new(stage.questions.len()),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!("\nOverall score: {}", report.overall_score);
    for strength in &report.strengths {
        eprintln!("  + {strength}");
    }
    for weakness in &report.weaknesses {
        eprintln!("  - {weakness}");
    }
    for recommendation in &report.recommendations {
        eprintln!("  > {recommendation}");
    }
}

fn save_reports(report: &InterviewReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "csv", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "csv" => {
                let path = output.join(format!("report-{timestamp}.csv"));
                write_csv_report(report, &path)?;
                eprintln!("CSV report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            other => {
                eprintln!("Unknown format: {other}");
            }
        }
    }

    Ok(())
}
