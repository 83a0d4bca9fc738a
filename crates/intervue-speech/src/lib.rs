//! intervue-speech — Speech capability providers.
//!
//! Implements the `SpeechProvider` seam from `intervue-core`: a null
//! provider for environments with no audio stack (the session falls back to
//! typed input) and a scripted mock for tests. A platform-backed provider
//! would slot in here without touching the core.

pub mod config;
pub mod mock;
pub mod null;

pub use config::{load_config, load_config_from, IntervueConfig};
pub use mock::MockSpeech;
pub use null::NullSpeech;

use anyhow::Result;
use intervue_core::traits::SpeechProvider;

/// Create a speech provider by its configured name.
pub fn create_provider(name: &str) -> Result<Box<dyn SpeechProvider>> {
    match name {
        "none" => Ok(Box::new(NullSpeech)),
        "mock" => Ok(Box::new(MockSpeech::default())),
        other => anyhow::bail!("unknown speech provider: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_resolves_known_providers() {
        assert_eq!(create_provider("none").unwrap().name(), "none");
        assert_eq!(create_provider("mock").unwrap().name(), "mock");
        assert!(create_provider("siri").is_err());
    }
}
