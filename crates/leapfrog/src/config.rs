//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use leapfrog_rules::{MAX_SIZE, MIN_SIZE, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// What sits in a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeatKind {
    /// A person typing moves on stdin.
    #[default]
    Human,
    /// The heuristic evaluator.
    Heuristic,
    /// Uniformly random legal moves.
    Random,
}

/// One seat of the match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SeatConfig {
    /// Who plays.
    kind: SeatKind,

    /// Display name; defaults to the colour and kind.
    #[setters(strip_option, into)]
    name: Option<String>,
}

impl SeatConfig {
    /// Creates a seat of the given kind with no explicit name.
    pub fn new(kind: SeatKind) -> Self {
        Self { kind, name: None }
    }

    /// Name shown for this seat when it plays `player`.
    pub fn display_name(&self, player: Player) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} ({})", player, self.kind),
        }
    }
}

/// Settings for one match, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchConfig {
    /// Board size; clamped to the supported range.
    size: usize,

    /// Pause before an automatic seat answers, in milliseconds.
    delay_ms: u64,

    /// Commands applied before the match is called off.
    max_turns: usize,

    /// Seed for random seats; fresh entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Black's seat (moves first).
    black: SeatConfig,

    /// White's seat.
    white: SeatConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: 7,
            delay_ms: 300,
            max_turns: 500,
            seed: None,
            black: SeatConfig::new(SeatKind::Human),
            white: SeatConfig::new(SeatKind::Heuristic),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            size = config.size,
            black = %config.black.kind,
            white = %config.white.kind,
            "Config loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Checks the settings, clamping the board size into range.
    #[instrument(skip(self))]
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::new("max_turns must be at least 1"));
        }

        let clamped = self.size.clamp(MIN_SIZE, MAX_SIZE);
        if clamped != self.size {
            warn!(requested = self.size, used = clamped, "Board size out of range, clamping");
            self.size = clamped;
        }
        Ok(self)
    }

    /// Returns the seat playing `player`.
    pub fn seat(&self, player: Player) -> &SeatConfig {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
