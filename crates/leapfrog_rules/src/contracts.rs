//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, move)} play {Q(before, after)}`.

use crate::error::MoveError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::{Move, MoveKind, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: while a chain is pending, only its continuations are allowed.
pub struct ChainRespected;

impl ChainRespected {
    /// Rejects any move outside a non-empty forced set.
    pub fn check(mv: &Move, game: &Game) -> Result<(), MoveError> {
        let forced = game.forced_moves();
        if !forced.is_empty() && !forced.contains(mv) {
            Err(MoveError::ForcedCapture(*mv))
        } else {
            Ok(())
        }
    }
}

/// Precondition: both endpoints lie on the board.
pub struct OnBoard;

impl OnBoard {
    /// Rejects moves with an off-board endpoint.
    pub fn check(mv: &Move, game: &Game) -> Result<(), MoveError> {
        let board = game.board();
        if board.contains(mv.from) && board.contains(mv.to) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(*mv))
        }
    }
}

/// Precondition: the moving piece belongs to the player to move.
pub struct PlayersPiece;

impl PlayersPiece {
    /// Rejects moves whose source is empty or an opposing piece.
    pub fn check(mv: &Move, game: &Game) -> Result<(), MoveError> {
        let expected = game.current_player();
        if game.owns(expected, mv.from) {
            Ok(())
        } else {
            Err(MoveError::NotYourPiece {
                at: mv.from,
                expected,
            })
        }
    }
}

/// Composite precondition: a move is legal if it respects the chain, stays on
/// the board, moves one of the player's pieces and classifies as Simple or
/// Capture.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the move's classification.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mv: &Move, game: &Game) -> Result<MoveKind, MoveError> {
        ChainRespected::check(mv, game)?;
        OnBoard::check(mv, game)?;
        PlayersPiece::check(mv, game)?;

        match game.board().classify_move(mv.from, mv.to) {
            MoveKind::Invalid => Err(MoveError::Illegal(*mv)),
            kind => Ok(kind),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::try_play`], which checks `pre` before touching the
/// board and `post` (in debug builds) after.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - all [`GameInvariants`] hold
/// - the mover keeps every piece
/// - the opponent loses at most one piece
pub struct PlayContract;

impl Contract<Game, Move> for PlayContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !PieceCountsConsistent::holds(before.current_player(), before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: piece counts changed unexpectedly".to_string(),
            ));
        }

        Ok(())
    }
}

/// Transition property: the mover keeps all pieces, the opponent loses at most one.
pub struct PieceCountsConsistent;

impl PieceCountsConsistent {
    /// Compares piece counts across one move by `mover`.
    pub fn holds(mover: Player, before: &Game, after: &Game) -> bool {
        let opponent = mover.opponent();
        let mover_kept = before.board().count(mover) == after.board().count(mover);
        let opponent_before = before.board().count(opponent);
        let opponent_after = after.board().count(opponent);

        let valid = mover_kept
            && opponent_after <= opponent_before
            && opponent_before - opponent_after <= 1;
        if !valid {
            warn!(?mover, opponent_before, opponent_after, "Piece counts inconsistent");
        }
        valid
    }
}
