//! Turn order, capture chains and win detection.

use crate::board::Board;
use crate::contracts::{Contract, PlayContract};
use crate::error::{MoveError, SetupError};
use crate::types::{Candidate, Coord, Destination, Direction, Move, MoveKind, Piece, Player, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given player to move (or pass).
    AwaitingMove(Player),
    /// Only the given player has pieces left.
    Finished(Player),
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    /// A simple step; the turn passed.
    Moved,
    /// A capture with no follow-up; the turn passed.
    Captured,
    /// A capture whose landing square allows further captures; the same
    /// player must continue with the same piece.
    ChainContinues,
}

/// Leapfrog game engine.
///
/// Owns the board, whose turn it is, and the set of forced continuations
/// after a capture. `Clone` produces a fully independent copy, which the
/// heuristic player uses for simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) forced_moves: Vec<Move>,
}

impl Game {
    /// Creates a game with the default layout. Black moves first.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::new(size))
    }

    /// Creates a game from an explicit placement of `(x, y, owner)` triples.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if a piece lies off the board.
    #[instrument(skip(pieces))]
    pub fn with_pieces(
        size: usize,
        pieces: impl IntoIterator<Item = (i32, i32, Player)>,
    ) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::with_pieces(size, pieces)?))
    }

    /// Creates a game around an existing board. Black moves first.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current_player: Player::Black,
            forced_moves: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns every piece in row-major order.
    pub fn pieces(&self) -> Vec<Piece> {
        self.board.pieces()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Sets the player to move, clearing any pending chain.
    ///
    /// Meant for setting up positions; ordinary play changes turns only
    /// through [`Game::try_play`] and [`Game::pass_turn`].
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
        self.forced_moves.clear();
    }

    /// Returns the moves the player must choose from, or an empty slice if
    /// no capture chain is pending.
    pub fn forced_moves(&self) -> &[Move] {
        &self.forced_moves
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        match self.is_finished() {
            Some(winner) => GameStatus::Finished(winner),
            None => GameStatus::AwaitingMove(self.current_player),
        }
    }

    /// Returns the winner if every remaining piece has the same owner.
    ///
    /// Mixed owners and an empty board both return `None`.
    pub fn is_finished(&self) -> Option<Player> {
        let mut winner = None;
        for piece in self.board.pieces() {
            match winner {
                None => winner = Some(piece.owner),
                Some(owner) if owner != piece.owner => return None,
                Some(_) => {}
            }
        }
        winner
    }

    /// Plays `(x1, y1) → (x2, y2)` for the current player.
    ///
    /// Returns `false`, leaving the game untouched, if the move is illegal.
    pub fn play(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.try_play(Move::new(Coord::new(x1, y1), Coord::new(x2, y2)))
            .is_ok()
    }

    /// Plays a move for the current player.
    ///
    /// A simple move always passes the turn. A capture passes the turn
    /// unless the capturing piece can capture again from its landing
    /// square, in which case those captures become the only legal moves.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing why the move was rejected; the
    /// game is unchanged in that case.
    #[instrument(level = "trace", skip(self), fields(player = ?self.current_player))]
    pub fn try_play(&mut self, mv: Move) -> Result<PlayOutcome, MoveError> {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        let before = self.clone();

        if let Err(e) = PlayContract::pre(self, &mv) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }
        let kind = self.board.classify_move(mv.from, mv.to);

        let outcome = match kind {
            MoveKind::Simple => {
                self.board.apply_move(mv.from, mv.to);
                self.pass_turn();
                PlayOutcome::Moved
            }
            MoveKind::Capture => {
                self.board.apply_capture(mv.from, mv.to);

                let follow_ups: Vec<Move> = self
                    .possible_moves(mv.to)
                    .into_iter()
                    .filter(|d| d.kind == MoveKind::Capture)
                    .map(|d| Move::new(mv.to, d.to))
                    .collect();

                if follow_ups.is_empty() {
                    self.pass_turn();
                    PlayOutcome::Captured
                } else {
                    debug!(
                        landing = %mv.to,
                        continuations = follow_ups.len(),
                        "Capture chain continues"
                    );
                    self.forced_moves = follow_ups;
                    PlayOutcome::ChainContinues
                }
            }
            MoveKind::Invalid => return Err(MoveError::Illegal(mv)),
        };

        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        {
            if let Err(e) = PlayContract::post(&before, self) {
                tracing::warn!(error = %e, "Postcondition failed, rolling back");
                *self = before;
                return Err(e);
            }
        }

        Ok(outcome)
    }

    /// Gives the turn to the opponent and drops any pending chain.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.forced_moves.clear();
        debug!(to_move = ?self.current_player, "Turn passed");
    }

    /// Lists every destination reachable from `from`, one or two steps in
    /// each of the eight directions, with its classification.
    ///
    /// Order: [`Direction`] declaration order, then distance 1 before 2.
    /// Ignores whose turn it is and any pending chain.
    pub fn possible_moves(&self, from: Coord) -> Vec<Destination> {
        let mut result = Vec::new();
        for direction in Direction::iter() {
            for distance in 1..=2 {
                let to = from.step(direction, distance);
                let kind = self.board.classify_move(from, to);
                if kind != MoveKind::Invalid {
                    result.push(Destination::new(to, kind));
                }
            }
        }
        result
    }

    /// Lists every move geometrically available to `player`: pieces in
    /// row-major order, destinations in [`Game::possible_moves`] order.
    pub fn legal_moves(&self, player: Player) -> Vec<Candidate> {
        self.board
            .pieces()
            .into_iter()
            .filter(|p| p.owner == player)
            .flat_map(|p| {
                let from = p.coord();
                self.possible_moves(from)
                    .into_iter()
                    .map(move |d| Candidate::new(from, d.to, d.kind))
            })
            .collect()
    }

    /// Checks whether `player` owns the piece at `at`.
    pub fn owns(&self, player: Player, at: Coord) -> bool {
        self.board.contains(at) && self.board.get(at) == Square::Occupied(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_moves_first() {
        let game = Game::new(7);
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::AwaitingMove(Player::Black));
    }

    #[test]
    fn test_simple_move_passes_turn() {
        let mut game =
            Game::with_pieces(3, [(0, 0, Player::Black), (2, 2, Player::White)]).unwrap();
        let step = Move::new(Coord::new(0, 0), Coord::new(1, 0));
        assert_eq!(game.try_play(step), Ok(PlayOutcome::Moved));
        assert_eq!(game.current_player(), Player::White);
        assert!(game.forced_moves().is_empty());
    }

    #[test]
    fn test_pass_turn_clears_chain() {
        let mut game = Game::with_pieces(
            5,
            [(0, 0, Player::Black), (1, 1, Player::White), (3, 3, Player::White)],
        )
        .unwrap();
        assert!(game.play(0, 0, 2, 2));
        assert!(!game.forced_moves().is_empty());

        game.pass_turn();
        assert_eq!(game.current_player(), Player::White);
        assert!(game.forced_moves().is_empty());
    }

    #[cfg(any(debug_assertions, feature = "strict-invariants"))]
    #[test]
    fn test_failed_postcondition_rolls_back() {
        let mut game =
            Game::with_pieces(3, [(0, 0, Player::Black), (2, 2, Player::White)]).unwrap();
        // Shrink the board below the supported range behind the engine's back
        game.board.size = 2;
        let snapshot = game.clone();

        let step = Move::new(Coord::new(0, 0), Coord::new(1, 0));
        assert!(matches!(
            game.try_play(step),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(game, snapshot);
        assert_eq!(game.board().get(Coord::new(0, 0)), Square::Occupied(Player::Black));
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_possible_moves_order() {
        let game = Game::with_pieces(3, [(0, 0, Player::Black), (1, 1, Player::White)]).unwrap();
        let moves = game.possible_moves(Coord::new(0, 0));
        assert_eq!(
            moves,
            vec![
                Destination::new(Coord::new(0, 1), MoveKind::Simple),
                Destination::new(Coord::new(1, 0), MoveKind::Simple),
                Destination::new(Coord::new(2, 2), MoveKind::Capture),
            ]
        );
    }

    #[test]
    fn test_possible_moves_of_empty_cell() {
        let game = Game::with_pieces(3, [(0, 0, Player::Black)]).unwrap();
        assert!(game.possible_moves(Coord::new(1, 1)).is_empty());
    }

    #[test]
    fn test_empty_board_is_not_finished() {
        let game = Game::with_pieces(4, Vec::new()).unwrap();
        assert_eq!(game.is_finished(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let game = Game::new(5);
        let mut copy = game.clone();
        assert!(copy.play(1, 3, 2, 2));
        assert_ne!(game, copy);
        assert_eq!(game.board().get(Coord::new(2, 2)), Square::Empty);
        assert_eq!(game.current_player(), Player::Black);
    }
}
