//! Interview report aggregation with JSON persistence.
//!
//! Consumes a completed session's answers, derives per-stage averages and
//! the strength/weakness/recommendation text, and assembles the structure
//! the export renderers consume. Built once at session completion and
//! read-only afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Stage;
use crate::results::Answer;
use crate::session::SessionOutcome;

/// Candidate metadata attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_position")]
    pub position: String,
}

fn default_name() -> String {
    "Candidate".into()
}

fn default_email() -> String {
    "candidate@example.com".into()
}

fn default_position() -> String {
    "Software Engineer".into()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            position: default_position(),
        }
    }
}

/// One question/answer/score/feedback tuple within a stage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReview {
    /// Display label (e.g. "Question 3", "Challenge 1").
    pub question: String,
    /// The answer text, transcript, or submitted source.
    pub answer: String,
    /// Score, 0-100.
    pub score: u8,
    /// Evaluator feedback.
    pub feedback: String,
}

/// Per-stage aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSummary {
    /// Which stage this summarizes.
    pub stage: Stage,
    /// Rounded mean score over the stage's answers; 0 for an empty stage.
    pub score: u8,
    /// The stage's reviews in submission order.
    pub questions: Vec<QuestionReview>,
}

/// The complete exportable report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Candidate metadata.
    pub profile: UserProfile,
    /// One summary per stage, in stage order.
    pub stages: Vec<StageSummary>,
    /// Rounded mean over all answers.
    pub overall_score: u8,
    /// Derived positive statements.
    pub strengths: Vec<String>,
    /// Derived improvement statements.
    pub weaknesses: Vec<String>,
    /// Derived preparation recommendations.
    pub recommendations: Vec<String>,
}

/// A stage scoring at or above this is counted as a strength.
const STAGE_STRENGTH_THRESHOLD: f64 = 70.0;

/// Per-stage canned statement pairs: (stage, strength, weakness).
const STAGE_ASSESSMENTS: [(Stage, &str, &str); 4] = [
    (
        Stage::Behavioral,
        "Strong communication and behavioral skills",
        "Needs improvement in behavioral interview responses",
    ),
    (
        Stage::Technical,
        "Solid technical knowledge",
        "Should strengthen technical fundamentals",
    ),
    (
        Stage::Coding,
        "Excellent coding and problem-solving abilities",
        "Practice more coding challenges",
    ),
    (
        Stage::Final,
        "Good cultural fit and professional presence",
        "Work on professional communication and company research",
    ),
];

/// Recommendation messages, selected by the first bracket the overall score
/// reaches.
const RECOMMENDATION_BRACKETS: [(u8, &[&str]); 3] = [
    (
        80,
        &["You're well-prepared! Focus on maintaining confidence during the actual interview."],
    ),
    (
        60,
        &[
            "Good foundation. Practice more in areas where you scored below 70.",
            "Consider mock interviews with peers or mentors.",
        ],
    ),
    (
        0,
        &[
            "Significant preparation needed. Focus on fundamentals in each area.",
            "Take online courses and practice regularly.",
        ],
    ),
];

/// Unrounded mean score over a stage's answers; `None` for an empty stage.
fn stage_mean(answers: &[Answer], stage: Stage) -> Option<f64> {
    let scores: Vec<u8> = answers
        .iter()
        .filter(|a| a.stage == stage)
        .map(|a| a.score)
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64)
}

fn review_label(stage: Stage, index: usize) -> String {
    match stage {
        Stage::Coding => format!("Challenge {}", index + 1),
        _ => format!("Question {}", index + 1),
    }
}

/// Build the exportable report from a completed session.
///
/// Answers are grouped by the stage they carry, so the aggregation holds for
/// any per-stage question count.
pub fn build_report(outcome: &SessionOutcome, profile: UserProfile) -> InterviewReport {
    let mut stages = Vec::with_capacity(Stage::ALL.len());
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for (stage, strength, weakness) in STAGE_ASSESSMENTS {
        let mean = stage_mean(&outcome.answers, stage);
        if mean.unwrap_or(0.0) >= STAGE_STRENGTH_THRESHOLD {
            strengths.push(strength.to_string());
        } else {
            weaknesses.push(weakness.to_string());
        }

        let questions = outcome
            .answers
            .iter()
            .filter(|a| a.stage == stage)
            .enumerate()
            .map(|(i, a)| QuestionReview {
                question: review_label(stage, i),
                answer: a.answer.clone(),
                score: a.score,
                feedback: a.feedback.clone(),
            })
            .collect();

        stages.push(StageSummary {
            stage,
            score: mean.map(|m| m.round() as u8).unwrap_or(0),
            questions,
        });
    }

    let recommendations = RECOMMENDATION_BRACKETS
        .iter()
        .find(|(threshold, _)| outcome.overall_score >= *threshold)
        .map(|(_, messages)| messages.iter().map(|m| m.to_string()).collect())
        .unwrap_or_default();

    InterviewReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        profile,
        stages,
        overall_score: outcome.overall_score,
        strengths,
        weaknesses,
        recommendations,
    }
}

impl InterviewReport {
    /// Save the report as JSON to a file, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: InterviewReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// The summary for a given stage, if present.
    pub fn stage(&self, stage: Stage) -> Option<&StageSummary> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}
