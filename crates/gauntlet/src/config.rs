//! Gauntlet configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gauntlet_tictactoe::{Mark, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a tournament session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GauntletConfig {
    /// Name shown for the human player.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Mark the human plays; the computer takes the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Seed for the randomized tiers. Unset means a fresh seed per run.
    #[serde(default)]
    seed: Option<u64>,

    /// Base pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Extra pause per tier above the first, in milliseconds.
    #[serde(default = "default_think_delay_per_tier_ms")]
    think_delay_per_tier_ms: u64,
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_think_delay_ms() -> u64 {
    400
}

fn default_think_delay_per_tier_ms() -> u64 {
    200
}

impl Default for GauntletConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            human_mark: default_human_mark(),
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            think_delay_per_tier_ms: default_think_delay_per_tier_ms(),
        }
    }
}

impl GauntletConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Pause before the computer moves at `tier`.
    pub fn think_delay(&self, tier: Tier) -> Duration {
        let extra = self.think_delay_per_tier_ms * u64::from(tier.level() - 1);
        Duration::from_millis(self.think_delay_ms + extra)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
