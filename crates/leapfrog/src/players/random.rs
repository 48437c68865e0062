//! Automatic player picking uniformly random moves.

use super::Player;
use anyhow::Result;
use leapfrog_rules::{Game, Move, format_move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::debug;

/// Picks a random piece that can move, then a random destination for it.
///
/// While a capture chain is pending it picks among the forced captures.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
    delay: Duration,
}

impl RandomPlayer {
    /// Creates a random player seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
            delay: Duration::ZERO,
        }
    }

    /// Creates a random player with a reproducible sequence.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }

    /// Sets a pause before each answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Chooses a move, or `None` when the player to move has nothing to play.
    pub fn choose(&mut self, game: &Game) -> Option<Move> {
        let forced = game.forced_moves();
        if !forced.is_empty() {
            let idx = self.rng.random_range(0..forced.len());
            return Some(forced[idx]);
        }

        let player = game.current_player();
        let movable: Vec<_> = game
            .pieces()
            .into_iter()
            .filter(|p| p.owner == player)
            .map(|p| (p.coord(), game.possible_moves(p.coord())))
            .filter(|(_, moves)| !moves.is_empty())
            .collect();
        if movable.is_empty() {
            return None;
        }

        let (from, moves) = &movable[self.rng.random_range(0..movable.len())];
        let destination = moves[self.rng.random_range(0..moves.len())];
        Some(Move::new(*from, destination.to))
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn next_command(&mut self, game: &Game) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let command = match self.choose(game) {
            Some(mv) => format_move(mv),
            None => "pass".to_string(),
        };
        debug!(ai = %self.name, %command, "Random player chose");
        Ok(command)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automatic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leapfrog_rules::{Coord, Player as Side};

    #[test]
    fn test_random_player_moves_are_legal() {
        let mut player = RandomPlayer::seeded("Random", 7);
        let game = Game::new(7);

        for _ in 0..100 {
            let mv = player.choose(&game).unwrap();
            let mut copy = game.clone();
            assert!(copy.try_play(mv).is_ok(), "{} is not legal", mv);
        }
    }

    #[test]
    fn test_random_player_follows_chain() {
        let mut game = Game::with_pieces(
            5,
            [(0, 0, Side::Black), (1, 1, Side::White), (3, 3, Side::White), (0, 4, Side::Black)],
        )
        .unwrap();
        assert!(game.play(0, 0, 2, 2));

        let mut player = RandomPlayer::seeded("Random", 1);
        for _ in 0..20 {
            assert_eq!(
                player.choose(&game),
                Some(Move::new(Coord::new(2, 2), Coord::new(4, 4)))
            );
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let game = Game::new(6);
        let mut a = RandomPlayer::seeded("A", 42);
        let mut b = RandomPlayer::seeded("B", 42);
        for _ in 0..10 {
            assert_eq!(a.choose(&game), b.choose(&game));
        }
    }

    #[test]
    fn test_stuck_player_passes() {
        let game = Game::with_pieces(3, [(0, 0, Side::White), (2, 2, Side::White)]).unwrap();
        let mut player = RandomPlayer::seeded("Random", 3);
        assert_eq!(player.choose(&game), None);
    }
}
