//! Core trait definitions for the external capabilities the session
//! consumes: speech synthesis/recognition and code execution.
//!
//! These async traits are implemented by the `intervue-speech` and
//! `intervue-runner` crates respectively. The scoring core never talks to a
//! platform object directly, only to these seams, so test doubles (and a
//! real sandboxed executor, later) can slot in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SpeechError;
use crate::model::{ProgrammingLanguage, TestCase};
use crate::results::ExecutionReport;

// ---------------------------------------------------------------------------
// Speech provider trait
// ---------------------------------------------------------------------------

/// Which speech directions a provider can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechSupport {
    /// Text-to-speech playback.
    pub tts: bool,
    /// Speech-to-text capture.
    pub stt: bool,
}

impl SpeechSupport {
    pub const NONE: SpeechSupport = SpeechSupport {
        tts: false,
        stt: false,
    };
    pub const FULL: SpeechSupport = SpeechSupport {
        tts: true,
        stt: true,
    };
}

/// Request to speak a piece of text aloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakRequest {
    /// The text to synthesize.
    pub text: String,
    /// Playback rate multiplier.
    pub rate: f64,
    /// Voice pitch multiplier.
    pub pitch: f64,
    /// Playback volume, 0.0 to 1.0.
    pub volume: f64,
}

impl SpeakRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// A captured spoken answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenResponse {
    /// The recognized transcript.
    pub transcript: String,
    /// Recording duration in seconds.
    pub duration_secs: u32,
}

/// Trait for speech synthesis and recognition backends.
///
/// Both operations are one-shot and cancelable: `speak` resolves when
/// playback finishes, `listen` resolves with a transcript, and the stop
/// methods abort the in-flight operation with no result.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Human-readable provider name (e.g. "mock").
    fn name(&self) -> &str;

    /// Which directions this provider supports.
    fn support(&self) -> SpeechSupport;

    /// Speak text aloud; resolves when playback completes.
    async fn speak(&self, request: &SpeakRequest) -> Result<(), SpeechError>;

    /// Capture one spoken answer; resolves with the transcript.
    async fn listen(&self) -> Result<SpokenResponse, SpeechError>;

    /// Abort in-flight playback.
    fn stop(&self);

    /// Abort in-flight recognition.
    fn cancel_listening(&self);
}

// ---------------------------------------------------------------------------
// Code executor trait
// ---------------------------------------------------------------------------

/// Request to run a code submission against a challenge's test cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// The submitted source text.
    pub source: String,
    /// Language the submission is written in.
    pub language: ProgrammingLanguage,
    /// The challenge's test cases, in order.
    pub test_cases: Vec<TestCase>,
}

/// Trait for running a code submission and reporting a pass count.
///
/// The shipped implementation simulates execution; scoring only ever sees
/// the resulting [`ExecutionReport`], so a real sandboxed runner can replace
/// it without touching the evaluator.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> anyhow::Result<ExecutionReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speak_request_defaults() {
        let request = SpeakRequest::new("Tell me about yourself.");
        assert_eq!(request.rate, 1.0);
        assert_eq!(request.pitch, 1.0);
        assert_eq!(request.volume, 1.0);
    }

    #[test]
    fn support_constants() {
        assert!(!SpeechSupport::NONE.tts);
        assert!(!SpeechSupport::NONE.stt);
        assert!(SpeechSupport::FULL.tts && SpeechSupport::FULL.stt);
    }
}
