//! Speech capability error types.
//!
//! Defined in `intervue-core` so the session-driving layer can classify
//! failures (fall back to typed input, retry, or abort) without string
//! matching on provider-specific messages.

use thiserror::Error;

/// Errors that can occur when interacting with a speech provider.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The capability (synthesis or recognition) is not available at all.
    #[error("speech capability not supported: {0}")]
    Unsupported(String),

    /// Recognition finished without hearing anything usable.
    #[error("no speech detected")]
    NoSpeechDetected,

    /// The operation was canceled before it produced a result.
    #[error("speech operation canceled")]
    Canceled,

    /// The underlying audio device or engine failed.
    #[error("speech device error: {0}")]
    Device(String),
}

impl SpeechError {
    /// Returns `true` if the session should fall back to typed text input
    /// instead of retrying the voice path.
    pub fn should_fall_back_to_text(&self) -> bool {
        matches!(
            self,
            SpeechError::Unsupported(_) | SpeechError::Device(_)
        )
    }
}
