//! Error types for the rule engine.

use crate::types::{Coord, Move, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating or applying a move.
///
/// These are ordinary outcomes of [`crate::Game::try_play`]; a rejected
/// move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// A capture chain is pending and the move is not one of its continuations.
    #[display("A capture chain is pending; {} is not a forced continuation", _0)]
    ForcedCapture(Move),

    /// One of the endpoints lies outside the board.
    #[display("Move {} leaves the board", _0)]
    OutOfBounds(Move),

    /// The source cell does not hold a piece of the player to move.
    #[display("{} has no piece of {} on it", at, expected)]
    NotYourPiece {
        /// Source cell.
        at: Coord,
        /// Player whose turn it is.
        expected: Player,
    },

    /// The move is neither a simple step nor a capture.
    #[display("{} is not a legal move", _0)]
    Illegal(Move),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error building a board from an explicit placement.
#[derive(Debug, Clone, Display, Error)]
#[display("Setup error: {} at {}:{}", message, file, line)]
pub struct SetupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error with caller location tracking.
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
