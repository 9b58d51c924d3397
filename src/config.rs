use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::challenge::Mode;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    #[serde(default = "default_speech_enabled")]
    pub speech_enabled: bool,
}

fn default_word_count() -> usize {
    20
}
fn default_mode() -> String {
    "typed".to_string()
}
fn default_provider_url() -> String {
    "https://english-elevate-server.vercel.app/api/vocabulary/get-random".to_string()
}
fn default_speech_command() -> String {
    "espeak".to_string()
}
fn default_speech_enabled() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            mode: default_mode(),
            provider_url: default_provider_url(),
            speech_command: default_speech_command(),
            speech_enabled: default_speech_enabled(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lexidr")
            .join("config.toml")
    }

    /// Validate `mode` against the known keys, resetting to default if
    /// invalid. Call after deserialization to handle stale keys from old
    /// configs.
    pub fn normalize_mode(&mut self) {
        // Backwards compatibility with the early mode names.
        match self.mode.as_str() {
            "input" => self.mode = "typed".to_string(),
            "listening" => self.mode = "audio".to_string(),
            "sentence" => self.mode = "reorder".to_string(),
            _ => {}
        }
        if Mode::from_key(&self.mode).is_none() {
            self.mode = default_mode();
        }
    }
}
