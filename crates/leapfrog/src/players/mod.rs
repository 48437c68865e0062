//! Player trait and implementations.

mod heuristic;
mod human;
mod random;

pub use heuristic::HeuristicPlayer;
pub use human::{HumanPlayer, SharedInput, stdin_lines};
pub use random::RandomPlayer;

use crate::config::{MatchConfig, SeatKind};
use anyhow::Result;
use leapfrog_rules::{Game, Player as Side};

/// A seat that answers with one line of command text per turn.
///
/// The answer uses the same notation a person would type: `a1c3`, `pass`
/// or `quit`.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next command for the player to move.
    async fn next_command(&mut self, game: &Game) -> Result<String>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether the seat plays by itself. An automatic seat that sends an
    /// illegal move ends the match with an error instead of being asked again.
    fn is_automatic(&self) -> bool;
}

/// Builds the seat for `side` as described by `config`.
///
/// Human seats read from `input`; random seats derive their seed from the
/// configured one so the two colours never share a sequence.
pub fn seat_from_config(config: &MatchConfig, side: Side, input: &SharedInput) -> Box<dyn Player> {
    let seat = config.seat(side);
    let name = seat.display_name(side);
    let delay = std::time::Duration::from_millis(*config.delay_ms());

    match seat.kind() {
        SeatKind::Human => Box::new(HumanPlayer::new(name, input.clone())),
        SeatKind::Heuristic => Box::new(HeuristicPlayer::new(name).with_delay(delay)),
        SeatKind::Random => {
            let player = match config.seed() {
                Some(seed) => RandomPlayer::seeded(name, seed.wrapping_add(side as u64)),
                None => RandomPlayer::new(name),
            };
            Box::new(player.with_delay(delay))
        }
    }
}
