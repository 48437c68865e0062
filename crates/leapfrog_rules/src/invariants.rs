//! First-class invariants for leapfrog.
//!
//! Invariants are logical properties that must hold between any two calls
//! to the game's mutation surface. They are checked after every successful
//! move in debug builds and can be tested independently.

use crate::game::Game;
use crate::types::{MAX_SIZE, MIN_SIZE, MoveKind, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every pending forced move is a capture on the current board.
pub struct ForcedMovesAreCaptures;

impl Invariant<Game> for ForcedMovesAreCaptures {
    fn holds(game: &Game) -> bool {
        game.forced_moves()
            .iter()
            .all(|mv| game.board().classify_move(mv.from, mv.to) == MoveKind::Capture)
    }

    fn description() -> &'static str {
        "Forced moves are all captures"
    }
}

/// Invariant: pending forced moves all start from one piece of the player to move.
pub struct ForcedMovesShareOrigin;

impl Invariant<Game> for ForcedMovesShareOrigin {
    fn holds(game: &Game) -> bool {
        let Some(first) = game.forced_moves().first() else {
            return true;
        };

        game.board().get(first.from) == Square::Occupied(game.current_player())
            && game.forced_moves().iter().all(|mv| mv.from == first.from)
    }

    fn description() -> &'static str {
        "Forced moves continue the chain of one piece owned by the player to move"
    }
}

/// Invariant: the board size stays within the supported range.
pub struct BoardSizeInRange;

impl Invariant<Game> for BoardSizeInRange {
    fn holds(game: &Game) -> bool {
        (MIN_SIZE..=MAX_SIZE).contains(&game.size())
    }

    fn description() -> &'static str {
        "Board size is between 3 and 9"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (ForcedMovesAreCaptures, ForcedMovesShareOrigin, BoardSizeInRange);
