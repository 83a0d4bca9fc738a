//! Provider for environments with no audio stack.

use async_trait::async_trait;

use intervue_core::error::SpeechError;
use intervue_core::traits::{SpeakRequest, SpeechProvider, SpeechSupport, SpokenResponse};

/// Reports no capability in either direction, so the session driver falls
/// back to typed input instead of waiting on a microphone that isn't there.
pub struct NullSpeech;

#[async_trait]
impl SpeechProvider for NullSpeech {
    fn name(&self) -> &str {
        "none"
    }

    fn support(&self) -> SpeechSupport {
        SpeechSupport::NONE
    }

    async fn speak(&self, _request: &SpeakRequest) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported("speech synthesis disabled".into()))
    }

    async fn listen(&self) -> Result<SpokenResponse, SpeechError> {
        Err(SpeechError::Unsupported("speech recognition disabled".into()))
    }

    fn stop(&self) {}

    fn cancel_listening(&self) {}
}
