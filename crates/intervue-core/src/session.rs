//! The stage/session state machine.
//!
//! Walks the fixed stage order (behavioral → technical → coding → final),
//! dispatches each submission to the evaluator matching the current
//! question's kind, and accumulates scored answers. The answer store is
//! keyed by question identity: re-submitting after backing up replaces the
//! earlier answer instead of appending a duplicate.

use anyhow::{bail, ensure, Result};
use chrono::Utc;

use crate::model::{Catalog, CodeChallenge, Question, QuestionKind, SessionPlan, Stage};
use crate::results::{Answer, ExecutionReport};
use crate::scoring::{
    analyze_voice_response, evaluate_answer, evaluate_code, score_multiple_choice,
    DEFAULT_MIN_WORD_COUNT,
};

/// User input for one submission, matched against the current question's kind.
#[derive(Debug, Clone)]
pub enum SubmissionInput {
    /// Typed free-text answer. Also the fallback for voice questions when
    /// no speech capability is available.
    Text(String),
    /// Transcribed spoken answer with its recording duration.
    Voice {
        transcript: String,
        duration_secs: u32,
    },
    /// Selected multiple-choice option id.
    Choice(String),
    /// Submitted source plus the executor's test outcome. Execution happens
    /// outside the session; scoring only reads the counts.
    Code {
        source: String,
        execution: ExecutionReport,
    },
}

/// What the session currently presents to the candidate.
#[derive(Debug, Clone, Copy)]
pub enum SessionItem<'a> {
    Question(&'a Question),
    Challenge(&'a CodeChallenge),
}

impl SessionItem<'_> {
    pub fn id(&self) -> &str {
        match self {
            SessionItem::Question(q) => &q.id,
            SessionItem::Challenge(c) => &c.id,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            SessionItem::Question(q) => &q.text,
            SessionItem::Challenge(c) => &c.description,
        }
    }
}

/// Everything the report aggregator needs once the session reaches its
/// terminal state.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// All answers in first-submission order.
    pub answers: Vec<Answer>,
    /// Rounded mean of all answer scores.
    pub overall_score: u8,
}

/// State machine over one interview session.
#[derive(Debug)]
pub struct InterviewSession {
    catalog: Catalog,
    plan: SessionPlan,
    current_stage: Stage,
    current_index: usize,
    answers: Vec<Answer>,
    completed_stages: Vec<Stage>,
    complete: bool,
}

impl InterviewSession {
    /// Start a session over `catalog`, drawing the per-stage counts in
    /// `plan`. Fails if the plan selects no material at all.
    pub fn new(catalog: Catalog, plan: SessionPlan) -> Result<Self> {
        let mut session = Self {
            catalog,
            plan,
            current_stage: Stage::Behavioral,
            current_index: 0,
            answers: Vec::new(),
            completed_stages: Vec::new(),
            complete: false,
        };
        let total: usize = Stage::ALL.iter().map(|&s| session.stage_len(s)).sum();
        ensure!(total > 0, "catalog has no material for the session plan");

        // The first stage may be empty in a sparse catalog; land on the
        // first stage that has something to ask.
        if session.stage_len(Stage::Behavioral) == 0 {
            session.advance_stage();
        }
        Ok(session)
    }

    /// Number of items this session draws from the given stage.
    pub fn stage_len(&self, stage: Stage) -> usize {
        let available = match stage {
            Stage::Coding => self.catalog.challenges.len(),
            _ => self.catalog.questions_for(stage).len(),
        };
        available.min(self.plan.count_for(stage))
    }

    pub fn current_stage(&self) -> Stage {
        self.current_stage
    }

    pub fn current_question_index(&self) -> usize {
        self.current_index
    }

    pub fn completed_stages(&self) -> &[Stage] {
        &self.completed_stages
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Answers submitted so far, in first-submission order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The item currently awaiting an answer, or `None` once complete.
    pub fn current_item(&self) -> Option<SessionItem<'_>> {
        if self.complete {
            return None;
        }
        match self.current_stage {
            Stage::Coding => self
                .catalog
                .challenges
                .get(self.current_index)
                .map(SessionItem::Challenge),
            stage => self
                .catalog
                .questions_for(stage)
                .get(self.current_index)
                .copied()
                .map(SessionItem::Question),
        }
    }

    /// Step back one question within the current stage. Already-submitted
    /// answers stay; a re-submission replaces them.
    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Score the given input against the current question, record the
    /// answer, and advance. Returns the recorded answer.
    pub fn submit(&mut self, input: SubmissionInput) -> Result<Answer> {
        ensure!(!self.complete, "session is already complete");
        let item = self
            .current_item()
            .ok_or_else(|| anyhow::anyhow!("no current question"))?;

        let answer = match (item, input) {
            (SessionItem::Question(q), input) => self.score_question(q, input)?,
            (
                SessionItem::Challenge(c),
                SubmissionInput::Code { source, execution },
            ) => {
                let evaluation =
                    evaluate_code(&source, execution.tests_passed, execution.total_tests);
                Answer {
                    question_id: c.id.clone(),
                    stage: Stage::Coding,
                    answer: source,
                    score: evaluation.score,
                    feedback: evaluation.feedback.clone(),
                    duration_secs: None,
                    voice_analysis: None,
                    code_evaluation: Some(evaluation),
                    submitted_at: Utc::now(),
                }
            }
            (SessionItem::Challenge(c), other) => {
                bail!("challenge '{}' expects a code submission, got {other:?}", c.id)
            }
        };

        self.record(answer.clone());
        self.advance();
        Ok(answer)
    }

    fn score_question(&self, question: &Question, input: SubmissionInput) -> Result<Answer> {
        let stage = question.stage;
        match (question.kind, input) {
            (QuestionKind::MultipleChoice, SubmissionInput::Choice(option_id)) => {
                let (score, feedback) = score_multiple_choice(question, &option_id);
                Ok(Answer {
                    question_id: question.id.clone(),
                    stage,
                    answer: option_id,
                    score,
                    feedback,
                    duration_secs: None,
                    voice_analysis: None,
                    code_evaluation: None,
                    submitted_at: Utc::now(),
                })
            }
            (QuestionKind::Voice, SubmissionInput::Voice { transcript, duration_secs }) => {
                let analysis = analyze_voice_response(&transcript, duration_secs);
                let evaluation =
                    evaluate_answer(&transcript, &question.keywords, DEFAULT_MIN_WORD_COUNT);
                Ok(Answer {
                    question_id: question.id.clone(),
                    stage,
                    answer: transcript,
                    score: evaluation.score,
                    feedback: evaluation.feedback,
                    duration_secs: Some(duration_secs),
                    voice_analysis: Some(analysis),
                    code_evaluation: None,
                    submitted_at: Utc::now(),
                })
            }
            // Typed fallback for voice questions, and plain text questions.
            (QuestionKind::Voice | QuestionKind::Text, SubmissionInput::Text(text)) => {
                let evaluation =
                    evaluate_answer(&text, &question.keywords, DEFAULT_MIN_WORD_COUNT);
                Ok(Answer {
                    question_id: question.id.clone(),
                    stage,
                    answer: text,
                    score: evaluation.score,
                    feedback: evaluation.feedback,
                    duration_secs: None,
                    voice_analysis: None,
                    code_evaluation: None,
                    submitted_at: Utc::now(),
                })
            }
            (kind, input) => {
                bail!(
                    "question '{}' of kind {kind} cannot take {input:?}",
                    question.id
                )
            }
        }
    }

    /// Insert or replace by question identity, preserving first-submission
    /// order.
    fn record(&mut self, answer: Answer) {
        tracing::debug!(
            question = %answer.question_id,
            stage = %answer.stage,
            score = answer.score,
            "answer recorded"
        );
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    fn advance(&mut self) {
        if self.current_index + 1 < self.stage_len(self.current_stage) {
            self.current_index += 1;
        } else {
            self.complete_stage();
        }
    }

    fn complete_stage(&mut self) {
        if !self.completed_stages.contains(&self.current_stage) {
            self.completed_stages.push(self.current_stage);
        }
        tracing::debug!(stage = %self.current_stage, "stage complete");
        self.advance_stage();
    }

    /// Move to the next non-empty stage, or finish the session.
    fn advance_stage(&mut self) {
        let mut stage = self.current_stage;
        loop {
            match stage.next() {
                Some(next) => {
                    stage = next;
                    if self.stage_len(stage) > 0 {
                        self.current_stage = stage;
                        self.current_index = 0;
                        return;
                    }
                    // Nothing to ask here; mark and keep walking.
                    if !self.completed_stages.contains(&stage) {
                        self.completed_stages.push(stage);
                    }
                }
                None => {
                    self.complete = true;
                    tracing::debug!(answers = self.answers.len(), "session complete");
                    return;
                }
            }
        }
    }

    /// The terminal outcome, once every stage is complete.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        if !self.complete {
            return None;
        }
        Some(SessionOutcome {
            answers: self.answers.clone(),
            overall_score: overall_score(&self.answers),
        })
    }
}

/// Rounded mean of all answer scores; 0 for an empty list.
pub fn overall_score(answers: &[Answer]) -> u8 {
    if answers.is_empty() {
        return 0;
    }
    let sum: u32 = answers.iter().map(|a| a.score as u32).sum();
    (sum as f64 / answers.len() as f64).round() as u8
}
