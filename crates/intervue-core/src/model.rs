//! Core data model types for intervue.
//!
//! These are the fundamental types the entire intervue system uses to
//! represent interview stages, questions, and coding challenges. Everything
//! here is immutable once loaded from a catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four sequential phases of an interview session, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Behavioral,
    Technical,
    Coding,
    Final,
}

impl Stage {
    /// All stages in session order.
    pub const ALL: [Stage; 4] = [
        Stage::Behavioral,
        Stage::Technical,
        Stage::Coding,
        Stage::Final,
    ];

    /// The stage that follows this one, or `None` after the final stage.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Behavioral => Some(Stage::Technical),
            Stage::Technical => Some(Stage::Coding),
            Stage::Coding => Some(Stage::Final),
            Stage::Final => None,
        }
    }

    /// Human-readable stage title used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Stage::Behavioral => "Behavioral Interview",
            Stage::Technical => "Technical Interview",
            Stage::Coding => "Coding Interview",
            Stage::Final => "Final Interview",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Behavioral => write!(f, "behavioral"),
            Stage::Technical => write!(f, "technical"),
            Stage::Coding => write!(f, "coding"),
            Stage::Final => write!(f, "final"),
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "behavioral" => Ok(Stage::Behavioral),
            "technical" => Ok(Stage::Technical),
            "coding" => Ok(Stage::Coding),
            "final" => Ok(Stage::Final),
            other => Err(format!("unknown stage: {other}")),
        }
    }
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Text,
    Voice,
    MultipleChoice,
    Code,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Text => write!(f, "text"),
            QuestionKind::Voice => write!(f, "voice"),
            QuestionKind::MultipleChoice => write!(f, "multiple-choice"),
            QuestionKind::Code => write!(f, "code"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(QuestionKind::Text),
            "voice" => Ok(QuestionKind::Voice),
            "multiple-choice" | "choice" => Ok(QuestionKind::MultipleChoice),
            "code" => Ok(QuestionKind::Code),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Difficulty rating for questions and challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Programming languages a coding challenge ships starter code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammingLanguage {
    JavaScript,
    TypeScript,
    Java,
    Golang,
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgrammingLanguage::JavaScript => write!(f, "javascript"),
            ProgrammingLanguage::TypeScript => write!(f, "typescript"),
            ProgrammingLanguage::Java => write!(f, "java"),
            ProgrammingLanguage::Golang => write!(f, "golang"),
        }
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(ProgrammingLanguage::JavaScript),
            "typescript" | "ts" => Ok(ProgrammingLanguage::TypeScript),
            "java" => Ok(ProgrammingLanguage::Java),
            "golang" | "go" => Ok(ProgrammingLanguage::Golang),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoiceOption {
    /// Option identifier (e.g. "a").
    pub id: String,
    /// Option text shown to the candidate.
    pub text: String,
    /// Whether this option is the correct one.
    #[serde(default)]
    pub is_correct: bool,
}

/// A single interview question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// The question prompt.
    pub text: String,
    /// How the question expects to be answered.
    pub kind: QuestionKind,
    /// The stage this question belongs to.
    pub stage: Stage,
    /// Optional answer time limit in seconds.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
    /// Keywords an answer is scored against.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Options for multiple-choice questions.
    #[serde(default)]
    pub options: Vec<MultipleChoiceOption>,
    /// Difficulty rating.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Topic category (e.g. "Leadership").
    #[serde(default)]
    pub category: Option<String>,
}

impl Question {
    /// The option flagged correct, for multiple-choice questions.
    pub fn correct_option(&self) -> Option<&MultipleChoiceOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }
}

/// A single test case of a coding challenge. Descriptive only; the
/// executor collaborator decides pass/fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Input description (e.g. "[2, 7, 11, 15], target = 9").
    pub input: String,
    /// Expected output description.
    pub expected_output: String,
    /// Human description of what the case covers.
    #[serde(default)]
    pub description: String,
}

/// Starter source text per supported language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarterCode {
    #[serde(default)]
    pub javascript: String,
    #[serde(default)]
    pub typescript: String,
    #[serde(default)]
    pub java: String,
    #[serde(default)]
    pub golang: String,
}

impl StarterCode {
    pub fn for_language(&self, language: ProgrammingLanguage) -> &str {
        match language {
            ProgrammingLanguage::JavaScript => &self.javascript,
            ProgrammingLanguage::TypeScript => &self.typescript,
            ProgrammingLanguage::Java => &self.java,
            ProgrammingLanguage::Golang => &self.golang,
        }
    }
}

/// A live-coding challenge presented during the coding stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChallenge {
    /// Unique identifier for this challenge.
    pub id: String,
    /// Challenge title (e.g. "Two Sum").
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Time limit in seconds.
    pub time_limit_secs: u64,
    /// Starter source text per supported language.
    #[serde(default)]
    pub starter_code: StarterCode,
    /// Ordered test cases the submission is judged against.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// Optional hints.
    #[serde(default)]
    pub hints: Vec<String>,
}

/// A named collection of questions and challenges for a full session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this catalog.
    #[serde(default)]
    pub description: String,
    /// Non-coding questions, each tagged with its stage.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Coding-stage challenges.
    #[serde(default)]
    pub challenges: Vec<CodeChallenge>,
}

impl Catalog {
    /// Questions belonging to the given (non-coding) stage, in catalog order.
    pub fn questions_for(&self, stage: Stage) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.stage == stage).collect()
    }
}

/// How many entries a session draws from the catalog per stage.
///
/// The catalog may hold more material than one session uses; the plan picks
/// the leading entries of each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub behavioral: usize,
    pub technical: usize,
    pub coding: usize,
    pub final_round: usize,
}

impl Default for SessionPlan {
    fn default() -> Self {
        // Reference session shape: 5 + 5 + 2 + 5 = 17 submissions.
        Self {
            behavioral: 5,
            technical: 5,
            coding: 2,
            final_round: 5,
        }
    }
}

impl SessionPlan {
    /// Planned entry count for a stage.
    pub fn count_for(&self, stage: Stage) -> usize {
        match stage {
            Stage::Behavioral => self.behavioral,
            Stage::Technical => self.technical,
            Stage::Coding => self.coding,
            Stage::Final => self.final_round,
        }
    }

    /// Total planned submissions across all stages.
    pub fn total(&self) -> usize {
        Stage::ALL.iter().map(|&s| self.count_for(s)).sum()
    }
}
