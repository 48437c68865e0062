//! Automatic player driven by the heuristic evaluator.

use super::Player;
use anyhow::Result;
use leapfrog_rules::{Game, Heuristic};
use std::time::Duration;
use tracing::debug;

/// Plays the heuristic's best move, or passes when it has none.
pub struct HeuristicPlayer {
    name: String,
    heuristic: Heuristic,
    delay: Duration,
}

impl HeuristicPlayer {
    /// Creates a heuristic player that answers immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heuristic: Heuristic::new(),
            delay: Duration::ZERO,
        }
    }

    /// Sets a pause before each answer so moves can be followed on screen.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for HeuristicPlayer {
    async fn next_command(&mut self, game: &Game) -> Result<String> {
        debug!(ai = %self.name, "Heuristic choosing move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let command = self
            .heuristic
            .suggest(game)
            .unwrap_or_else(|| "pass".to_string());
        debug!(ai = %self.name, %command, "Heuristic chose");
        Ok(command)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automatic(&self) -> bool {
        true
    }
}
