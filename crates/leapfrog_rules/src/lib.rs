//! Leapfrog rule engine
//!
//! Pure, synchronous rules for an N×N jump-capture game (N between 3 and 9).
//! Pieces step one cell in any of eight directions or jump two cells over an
//! adjacent opposing piece to remove it. A piece that captures and can
//! capture again must keep going.
//!
//! # Architecture
//!
//! - **Board**: grid storage, move classification, the default layout
//! - **Game**: turn order, forced capture chains, win detection
//! - **Heuristic**: the automatic player's one-ply evaluator
//! - **Notation**: `a1c3`-style coordinates and player commands
//!
//! # Example
//!
//! ```
//! use leapfrog_rules::{Game, Heuristic, Player};
//!
//! let mut game = Game::with_pieces(3, [(0, 0, Player::Black), (1, 1, Player::White)])?;
//! assert_eq!(Heuristic::new().suggest(&game).as_deref(), Some("a1c3"));
//!
//! assert!(game.play(0, 0, 2, 2));
//! assert_eq!(game.is_finished(), Some(Player::Black));
//! # Ok::<(), leapfrog_rules::SetupError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod contracts;
mod error;
mod game;
mod heuristic;
mod invariants;
mod notation;
mod types;

// Crate-level exports - Core types
pub use types::{
    Candidate, Coord, Destination, Direction, MAX_SIZE, MIN_SIZE, Move, MoveKind, Piece, Player,
    Square,
};

// Crate-level exports - Board and game
pub use board::Board;
pub use game::{Game, GameStatus, PlayOutcome};

// Crate-level exports - Errors
pub use error::{MoveError, SetupError};
pub use notation::NotationError;

// Crate-level exports - Validation
pub use contracts::{
    ChainRespected, Contract, LegalMove, OnBoard, PieceCountsConsistent, PlayContract, PlayersPiece,
};
pub use invariants::{
    BoardSizeInRange, ForcedMovesAreCaptures, ForcedMovesShareOrigin, GameInvariants, Invariant,
    InvariantSet, InvariantViolation,
};

// Crate-level exports - Automatic play
pub use heuristic::{
    CAPTURE_BONUS, CHAIN_BONUS, Heuristic, OPPONENT_CAPTURE_PENALTY, OPPONENT_MOVE_PENALTY,
};

// Crate-level exports - Notation
pub use notation::{Command, column_label, format_coord, format_move, parse_coord};
