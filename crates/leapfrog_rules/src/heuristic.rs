//! Heuristic move selection for the automatic player.
//!
//! Every candidate is scored on its own clone of the game:
//!
//! - a capture earns +10;
//! - if the mover keeps the turn afterwards (a chain), another +10 plus the
//!   score of the best continuation from the landing square;
//! - the opponent's options on the resulting position cost 3 per capture
//!   and 1 per move.
//!
//! The highest score wins; ties keep the earliest candidate in
//! [`Game::legal_moves`] order. This is a one-ply evaluation with chain
//! lookahead, not an adversarial search.

use crate::game::Game;
use crate::notation::format_move;
use crate::types::{Candidate, MoveKind, Player};
use tracing::{debug, instrument, trace};

/// Bonus for a capture.
pub const CAPTURE_BONUS: i32 = 10;

/// Bonus for keeping the turn after a capture.
pub const CHAIN_BONUS: i32 = 10;

/// Penalty per capture available to the opponent afterwards.
pub const OPPONENT_CAPTURE_PENALTY: i32 = 3;

/// Penalty per move available to the opponent afterwards.
pub const OPPONENT_MOVE_PENALTY: i32 = 1;

/// Stateless heuristic evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heuristic;

impl Heuristic {
    /// Creates the evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Scores one candidate for `player`.
    ///
    /// Returns `None` when the move cannot be played on a copy of `game`
    /// (for instance because a capture chain forces a different move).
    /// `game` itself is never modified.
    pub fn evaluate(&self, game: &Game, player: Player, candidate: &Candidate) -> Option<i32> {
        let mut score = 0;
        if candidate.kind == MoveKind::Capture {
            score += CAPTURE_BONUS;
        }

        let mut simulation = game.clone();
        simulation.try_play(candidate.as_move()).ok()?;

        if simulation.current_player() == player {
            score += CHAIN_BONUS;

            let landing = candidate.to;
            let continuations = simulation
                .possible_moves(landing)
                .into_iter()
                .map(|d| Candidate::new(landing, d.to, d.kind));
            if let Some((_, best)) = self.best_among(&simulation, player, continuations) {
                score += best;
            }
        }

        let opponent_moves = simulation.legal_moves(player.opponent());
        let opponent_captures = opponent_moves
            .iter()
            .filter(|c| c.kind == MoveKind::Capture)
            .count() as i32;

        score -= opponent_captures * OPPONENT_CAPTURE_PENALTY;
        score -= opponent_moves.len() as i32 * OPPONENT_MOVE_PENALTY;

        trace!(candidate = %candidate.as_move(), score, "Candidate scored");
        Some(score)
    }

    /// Returns the highest-scoring candidate and its score.
    ///
    /// Candidates that cannot be played are skipped. On equal scores the
    /// earlier candidate is kept.
    pub fn best_among(
        &self,
        game: &Game,
        player: Player,
        candidates: impl IntoIterator<Item = Candidate>,
    ) -> Option<(Candidate, i32)> {
        let mut best: Option<(Candidate, i32)> = None;
        for candidate in candidates {
            let Some(score) = self.evaluate(game, player, &candidate) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }
        best
    }

    /// Picks the move for the player to move, or `None` if there is
    /// nothing playable (the caller should pass).
    #[instrument(skip(self, game), fields(player = ?game.current_player()))]
    pub fn best_move(&self, game: &Game) -> Option<Candidate> {
        let player = game.current_player();
        let candidates = game.legal_moves(player);
        debug!(count = candidates.len(), "Evaluating candidates");

        let best = self.best_among(game, player, candidates);
        match &best {
            Some((candidate, score)) => {
                debug!(choice = %candidate.as_move(), score, "Heuristic choice")
            }
            None => debug!("No playable candidate"),
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Returns the chosen move in notation (`a1c3`), or `None` to pass.
    pub fn suggest(&self, game: &Game) -> Option<String> {
        self.best_move(game).map(|c| format_move(c.as_move()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_capture_beats_simple_moves() {
        let game = Game::with_pieces(3, [(0, 0, Player::Black), (1, 1, Player::White)]).unwrap();
        let heuristic = Heuristic::new();
        let scores: Vec<_> = game
            .legal_moves(Player::Black)
            .iter()
            .map(|c| heuristic.evaluate(&game, Player::Black, c))
            .collect();
        assert_eq!(scores, vec![Some(-7), Some(-7), Some(10)]);
        assert_eq!(heuristic.suggest(&game).as_deref(), Some("a1c3"));
    }

    #[test]
    fn test_nothing_to_play_means_pass() {
        let game = Game::with_pieces(3, [(0, 0, Player::White)]).unwrap();
        assert_eq!(Heuristic::new().suggest(&game), None);
    }

    #[test]
    fn test_moves_outside_forced_chain_are_skipped() {
        let mut game = Game::with_pieces(
            5,
            [
                (0, 0, Player::Black),
                (1, 1, Player::White),
                (3, 3, Player::White),
                (0, 4, Player::Black),
            ],
        )
        .unwrap();
        assert!(game.play(0, 0, 2, 2));

        let stray = Candidate::new(Coord::new(0, 4), Coord::new(0, 3), MoveKind::Simple);
        assert_eq!(Heuristic::new().evaluate(&game, Player::Black, &stray), None);
        assert_eq!(Heuristic::new().suggest(&game).as_deref(), Some("c3e5"));
    }

    #[test]
    fn test_evaluation_leaves_game_untouched() {
        let game = Game::new(5);
        let snapshot = game.clone();
        let _ = Heuristic::new().best_move(&game);
        assert_eq!(game, snapshot);
    }
}
