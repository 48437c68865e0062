//! Human player that reads moves from the terminal.

use super::Player;
use anyhow::Result;
use leapfrog_rules::Game;
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};

/// Line source shared by every human seat at the table.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Starts forwarding stdin lines into a [`SharedInput`].
///
/// Reading happens on a plain thread so a pending read never holds up
/// runtime shutdown. The channel closes at end of input.
pub fn stdin_lines() -> SharedInput {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
        debug!("Stdin reader finished");
    });
    Arc::new(Mutex::new(rx))
}

/// Human player typing commands.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn next_command(&mut self, _game: &Game) -> Result<String> {
        match self.input.lock().await.recv().await {
            Some(line) => Ok(line),
            None => {
                // End of input counts as leaving the table
                info!(player = %self.name, "Input closed");
                Ok("quit".to_string())
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automatic(&self) -> bool {
        false
    }
}
