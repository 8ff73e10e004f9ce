use crate::core::classifier::{InputLimits, DEFAULT_MAX_INPUT_CHARS, DEFAULT_MAX_INPUT_WORDS};
use crate::error::{ChatError, ChatResult};
use crate::utils::fuzzy::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    // Matching
    pub similarity_threshold: f64,
    pub max_input_chars: usize,
    pub max_input_words: usize,

    // Chat UI
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,

    // Meta
    pub log_level: String,

    // Data
    pub extra_shortcuts: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_THRESHOLD,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_input_words: DEFAULT_MAX_INPUT_WORDS,
            typing_delay_min_ms: 800,
            typing_delay_max_ms: 1200,
            log_level: "INFO".to_string(),
            extra_shortcuts: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> ChatResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file gives defaults. A corrupt file is moved aside to
    /// `*.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> ChatResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                return Ok(Self::default());
            }
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ChatResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the classifier or session cannot work with
    pub fn validate(&self) -> ChatResult<()> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(ChatError::Config(format!(
                "similarity_threshold must be in (0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.max_input_chars == 0 || self.max_input_words == 0 {
            return Err(ChatError::Config(
                "max_input_chars and max_input_words must be positive".to_string(),
            ));
        }
        if self.typing_delay_min_ms > self.typing_delay_max_ms {
            return Err(ChatError::Config(format!(
                "typing_delay_min_ms ({}) exceeds typing_delay_max_ms ({})",
                self.typing_delay_min_ms, self.typing_delay_max_ms
            )));
        }
        Ok(())
    }

    pub fn input_limits(&self) -> InputLimits {
        InputLimits {
            max_chars: self.max_input_chars,
            max_words: self.max_input_words,
        }
    }

    /// Range the simulated typing delay is drawn from
    pub fn typing_delay(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.typing_delay_min_ms),
            Duration::from_millis(self.typing_delay_max_ms),
        )
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatdesk")
        .join("config.json")
}
