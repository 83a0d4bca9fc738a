//! Evaluation result types.
//!
//! Everything in this module is derived data: produced once by an evaluator
//! or the session engine, then never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Stage;

/// Scoring result for a free-text or transcribed answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    /// Overall score, 0-100.
    pub score: u8,
    /// Percentage of expected keywords found in the answer.
    pub keyword_match: u8,
    /// Depth score from answer length and sentence structure, 0-100.
    pub depth: u8,
    /// Relevance score, 0-100.
    pub relevance: u8,
    /// Human-readable feedback.
    pub feedback: String,
    /// Keywords found in the answer.
    pub matched_keywords: Vec<String>,
    /// Keywords the answer did not mention.
    pub missed_keywords: Vec<String>,
}

/// Categorical tone of a spoken answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Nervous,
    Confident,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Professional => write!(f, "professional"),
            Tone::Casual => write!(f, "casual"),
            Tone::Nervous => write!(f, "nervous"),
            Tone::Confident => write!(f, "confident"),
        }
    }
}

/// Heuristic analysis of a spoken answer's delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    /// Clarity score, 0-100. Penalized by filler words.
    pub clarity: u8,
    /// Confidence score, 0-100. Combines clarity and pacing.
    pub confidence: u8,
    /// Speaking pace in words per minute.
    pub pace: u32,
    /// Categorical tone classification.
    pub tone: Tone,
    /// Number of words in the transcript.
    pub word_count: usize,
    /// Recording duration in seconds.
    pub duration_secs: u32,
}

/// Heuristic quality scoring of a code submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEvaluation {
    /// Overall score, 0-100.
    pub score: u8,
    /// Correctness from the supplied test outcome, 0-100.
    pub correctness: u8,
    /// Efficiency heuristic, 0-100.
    pub efficiency: u8,
    /// Readability heuristic, 0-100.
    pub readability: u8,
    /// Best-practices heuristic, 0-100.
    pub best_practices: u8,
    /// Human-readable feedback.
    pub feedback: String,
    /// Tests the submission passed.
    pub tests_passed: u32,
    /// Total tests the submission was judged against.
    pub total_tests: u32,
}

/// Outcome of running (or simulating) a code submission against its test
/// cases. Produced by a `CodeExecutor`; the evaluator only reads the counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Tests that passed.
    pub tests_passed: u32,
    /// Total tests run.
    pub total_tests: u32,
    /// Per-test output lines, for display.
    #[serde(default)]
    pub output: Vec<String>,
    /// Wall-clock duration of the (simulated) run in milliseconds.
    pub duration_ms: u64,
}

/// One scored submission. Created by the session engine at submission time
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question or challenge this answers.
    pub question_id: String,
    /// The stage the question belongs to. Stored explicitly so aggregation
    /// never has to infer stage membership from list position.
    pub stage: Stage,
    /// The raw answer text, transcript, or submitted source.
    pub answer: String,
    /// Score, 0-100.
    pub score: u8,
    /// Feedback from the evaluator that scored this answer.
    pub feedback: String,
    /// Recording duration in seconds, for voice answers.
    #[serde(default)]
    pub duration_secs: Option<u32>,
    /// Delivery analysis, for voice answers.
    #[serde(default)]
    pub voice_analysis: Option<VoiceAnalysis>,
    /// Quality breakdown, for code answers.
    #[serde(default)]
    pub code_evaluation: Option<CodeEvaluation>,
    /// When the answer was submitted.
    pub submitted_at: DateTime<Utc>,
}
