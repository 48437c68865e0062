//! Match orchestration between two seats.

use crate::players::Player;
use anyhow::{Result, bail};
use leapfrog_rules::{Board, Command, Game, Move, PlayOutcome, Player as Side};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Only this colour has pieces left.
    Winner(Side),
    /// A seat quit.
    Abandoned,
    /// The turn limit was reached with both colours still on the board.
    TurnLimit,
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Board updated.
    StateChanged(Board),
    /// A seat is about to be asked for a command.
    AwaitingMove {
        /// Colour to move.
        side: Side,
        /// Seat name.
        name: String,
        /// Whether the seat plays by itself.
        automatic: bool,
        /// Captures the seat must choose from, if a chain is pending.
        forced: Vec<Move>,
    },
    /// A move was applied.
    MoveMade {
        /// Colour that moved.
        side: Side,
        /// Seat name.
        name: String,
        /// The move played.
        mv: Move,
        /// What the move did.
        outcome: PlayOutcome,
    },
    /// A seat passed.
    Passed {
        /// Colour that passed.
        side: Side,
        /// Seat name.
        name: String,
    },
    /// The seat's text was not a command.
    InvalidInput {
        /// Seat name.
        name: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The seat's move was rejected by the rules.
    IllegalMove {
        /// Seat name.
        name: String,
        /// Why the move was rejected.
        reason: String,
    },
    /// Match ended.
    GameOver {
        /// How it ended.
        outcome: MatchOutcome,
        /// Name of the winning seat, if any.
        winner: Option<String>,
    },
}

/// Drives a match between two seats until someone wins, quits, or the
/// turn limit runs out.
pub struct Orchestrator {
    game: Game,
    black: Box<dyn Player>,
    white: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    max_turns: usize,
}

impl Orchestrator {
    /// Creates a new orchestrator for `game`.
    pub fn new(
        game: Game,
        black: Box<dyn Player>,
        white: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        max_turns: usize,
    ) -> Self {
        Self {
            game,
            black,
            white,
            event_tx,
            max_turns,
        }
    }

    /// Returns the game in its current state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn seat(&self, side: Side) -> &dyn Player {
        match side {
            Side::Black => self.black.as_ref(),
            Side::White => self.white.as_ref(),
        }
    }

    /// Runs the match loop.
    ///
    /// # Errors
    ///
    /// Fails if a seat errors, if an automatic seat answers with something
    /// the rules reject, or if the UI side of the event channel is gone.
    #[instrument(skip(self), fields(size = self.game.size(), max_turns = self.max_turns))]
    pub async fn run(&mut self) -> Result<MatchOutcome> {
        info!(black = %self.black.name(), white = %self.white.name(), "Starting match");
        self.event_tx.send(GameEvent::StateChanged(self.game.board().clone()))?;

        let mut turns = 0;
        let outcome = loop {
            if let Some(winner) = self.game.is_finished() {
                break MatchOutcome::Winner(winner);
            }
            if turns >= self.max_turns {
                warn!(turns, "Turn limit reached");
                break MatchOutcome::TurnLimit;
            }

            let side = self.game.current_player();
            let (name, automatic) = {
                let seat = self.seat(side);
                (seat.name().to_string(), seat.is_automatic())
            };

            self.event_tx.send(GameEvent::AwaitingMove {
                side,
                name: name.clone(),
                automatic,
                forced: self.game.forced_moves().to_vec(),
            })?;

            debug!(player = %name, "Waiting for command");
            let seat = match side {
                Side::Black => &mut self.black,
                Side::White => &mut self.white,
            };
            let text = seat.next_command(&self.game).await?;

            let command = match Command::parse(&text, self.game.size()) {
                Ok(command) => command,
                Err(e) if automatic => bail!("{} sent unreadable command {:?}: {}", name, text, e),
                Err(e) => {
                    warn!(player = %name, error = %e, "Invalid input");
                    self.event_tx.send(GameEvent::InvalidInput {
                        name,
                        reason: e.to_string(),
                    })?;
                    continue;
                }
            };

            match command {
                Command::Quit => {
                    info!(player = %name, "Seat quit");
                    break MatchOutcome::Abandoned;
                }
                Command::Pass => {
                    self.game.pass_turn();
                    turns += 1;
                    self.event_tx.send(GameEvent::Passed { side, name })?;
                }
                Command::Play(mv) => match self.game.try_play(mv) {
                    Ok(outcome) => {
                        turns += 1;
                        debug!(player = %name, %mv, ?outcome, "Move applied");
                        self.event_tx.send(GameEvent::MoveMade {
                            side,
                            name,
                            mv,
                            outcome,
                        })?;
                    }
                    Err(e) if automatic => bail!("{} played illegal move {}: {}", name, mv, e),
                    Err(e) => {
                        warn!(player = %name, error = %e, "Illegal move");
                        self.event_tx.send(GameEvent::IllegalMove {
                            name,
                            reason: e.to_string(),
                        })?;
                        continue;
                    }
                },
            }

            self.event_tx.send(GameEvent::StateChanged(self.game.board().clone()))?;
        };

        let winner = match outcome {
            MatchOutcome::Winner(side) => Some(self.seat(side).name().to_string()),
            _ => None,
        };
        info!(?outcome, turns, "Match over");
        self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
        Ok(outcome)
    }
}
