//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use intervue_core::model::SessionPlan;
use intervue_core::report::UserProfile;

/// Speech-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Provider name ("none" or "mock").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Playback rate multiplier for question read-out.
    #[serde(default = "default_unit")]
    pub rate: f64,
    /// Voice pitch multiplier.
    #[serde(default = "default_unit")]
    pub pitch: f64,
    /// Playback volume, 0.0 to 1.0.
    #[serde(default = "default_unit")]
    pub volume: f64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

fn default_provider() -> String {
    "none".to_string()
}

fn default_unit() -> f64 {
    1.0
}

/// Per-stage question counts for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_behavioral")]
    pub behavioral_questions: usize,
    #[serde(default = "default_technical")]
    pub technical_questions: usize,
    #[serde(default = "default_coding")]
    pub coding_challenges: usize,
    #[serde(default = "default_final")]
    pub final_questions: usize,
}

fn default_behavioral() -> usize {
    5
}
fn default_technical() -> usize {
    5
}
fn default_coding() -> usize {
    2
}
fn default_final() -> usize {
    5
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            behavioral_questions: default_behavioral(),
            technical_questions: default_technical(),
            coding_challenges: default_coding(),
            final_questions: default_final(),
        }
    }
}

impl SessionSettings {
    pub fn to_plan(&self) -> SessionPlan {
        SessionPlan {
            behavioral: self.behavioral_questions,
            technical: self.technical_questions,
            coding: self.coding_challenges,
            final_round: self.final_questions,
        }
    }
}

/// Top-level intervue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervueConfig {
    /// Candidate metadata stamped onto reports.
    #[serde(default)]
    pub profile: UserProfile,
    /// Speech capability settings.
    #[serde(default)]
    pub speech: SpeechSettings,
    /// Session shape.
    #[serde(default)]
    pub session: SessionSettings,
    /// Catalog file used when the command line doesn't name one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./intervue-results")
}

impl Default for IntervueConfig {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            speech: SpeechSettings::default(),
            session: SessionSettings::default(),
            catalog: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `intervue.toml` in the current directory
/// 2. `~/.config/intervue/config.toml`
///
/// Environment variable override: `INTERVUE_SPEECH_PROVIDER`.
pub fn load_config() -> Result<IntervueConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<IntervueConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("intervue.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loading config from {}", path.display());
            toml::from_str::<IntervueConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => IntervueConfig::default(),
    };

    if let Ok(provider) = std::env::var("INTERVUE_SPEECH_PROVIDER") {
        config.speech.provider = provider;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("intervue"))
}
