//! Game configuration: optional TOML file plus command-line overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Profile page linked from the footer.
pub const DEFAULT_PROFILE_URL: &str = "https://andrew-profile-site.web.app/proj.html";

/// Runtime settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before the computer plays, in milliseconds.
    ai_delay_ms: u64,

    /// Seed for the computer's RNG. Random when absent.
    seed: Option<u64>,

    /// Link shown in the footer.
    profile_url: String,

    /// Where tracing output goes.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 300,
            seed: None,
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ai_delay_ms = config.ai_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        ai_delay_ms: Option<u64>,
        seed: Option<u64>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Delay before the computer plays.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
