//! Mock speech provider for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use intervue_core::error::SpeechError;
use intervue_core::traits::{SpeakRequest, SpeechProvider, SpeechSupport, SpokenResponse};

/// A mock speech provider that plays back scripted transcripts.
///
/// `speak` records what would have been spoken; `listen` pops the next
/// scripted response. Call counters and cancel flags let tests assert how
/// the session drove the capability.
#[derive(Default)]
pub struct MockSpeech {
    /// Scripted responses returned by `listen`, in order.
    responses: Mutex<VecDeque<SpokenResponse>>,
    /// Texts passed to `speak`.
    spoken: Mutex<Vec<String>>,
    listen_count: AtomicU32,
    stopped: AtomicBool,
    listening_canceled: AtomicBool,
}

impl MockSpeech {
    /// Create a mock that answers `listen` with the given transcripts.
    pub fn with_responses(responses: Vec<SpokenResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    /// Convenience: one scripted transcript.
    pub fn with_transcript(transcript: &str, duration_secs: u32) -> Self {
        Self::with_responses(vec![SpokenResponse {
            transcript: transcript.to_string(),
            duration_secs,
        }])
    }

    /// Texts spoken so far.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    /// Number of `listen` calls made.
    pub fn listen_count(&self) -> u32 {
        self.listen_count.load(Ordering::Relaxed)
    }

    pub fn was_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn was_listening_canceled(&self) -> bool {
        self.listening_canceled.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SpeechProvider for MockSpeech {
    fn name(&self) -> &str {
        "mock"
    }

    fn support(&self) -> SpeechSupport {
        SpeechSupport::FULL
    }

    async fn speak(&self, request: &SpeakRequest) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(request.text.clone());
        Ok(())
    }

    async fn listen(&self) -> Result<SpokenResponse, SpeechError> {
        self.listen_count.fetch_add(1, Ordering::Relaxed);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(SpeechError::NoSpeechDetected)
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    fn cancel_listening(&self) {
        self.listening_canceled.store(true, Ordering::Relaxed);
    }
}
