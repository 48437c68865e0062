//! Core domain types for leapfrog.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Smallest supported board size.
pub const MIN_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Black (moves first, starts in the upper-left triangle).
    Black,
    /// White (starts in the lower-right triangle).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-letter symbol used in plain-text boards.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a piece of the given player.
    Occupied(Player),
}

impl Square {
    /// Returns the owner of the piece on this square, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A cell coordinate: `x` is the column, `y` the row (row 0 on top).
///
/// Coordinates are signed so that direction arithmetic can step off the
/// board; [`crate::Board::contains`] decides whether one is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Returns the coordinate `distance` steps away in `direction`.
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// Integer midpoint between two coordinates.
    pub fn midpoint(self, other: Coord) -> Self {
        Self::new((self.x + other.x).div_euclid(2), (self.y + other.y).div_euclid(2))
    }

    /// Squared euclidean distance to another coordinate.
    pub fn distance_squared(self, other: Coord) -> i32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::notation::format_coord(*self))
    }
}

/// One of the eight directions a piece can travel in.
///
/// The declaration order is the move enumeration order: `dx` from -1 to 1,
/// and within each `dx`, `dy` from -1 to 1. The heuristic player breaks
/// ties on this order, so it must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// dx = -1, dy = -1
    NorthWest,
    /// dx = -1, dy = 0
    West,
    /// dx = -1, dy = 1
    SouthWest,
    /// dx = 0, dy = -1
    North,
    /// dx = 0, dy = 1
    South,
    /// dx = 1, dy = -1
    NorthEast,
    /// dx = 1, dy = 0
    East,
    /// dx = 1, dy = 1
    SouthEast,
}

impl Direction {
    /// Unit step `(dx, dy)` of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Classification of a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveKind {
    /// One step onto an empty neighbour.
    Simple,
    /// Two-step jump over an adjacent opposing piece, removing it.
    Capture,
    /// Anything else.
    Invalid,
}

/// A move request: relocate the piece at `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Source cell.
    pub from: Coord,
    /// Destination cell.
    pub to: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::notation::format_move(*self))
    }
}

/// An occupied cell as reported by [`crate::Board::pieces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Piece {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Owner of the piece.
    pub owner: Player,
}

impl Piece {
    /// Cell the piece stands on.
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// A reachable destination from some piece, with its classification.
///
/// Never carries [`MoveKind::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Destination {
    /// Target cell.
    pub to: Coord,
    /// Simple or Capture.
    pub kind: MoveKind,
}

/// A move available to a player: which piece, where to, and what kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Candidate {
    /// Cell of the moving piece.
    pub from: Coord,
    /// Destination cell.
    pub to: Coord,
    /// Simple or Capture.
    pub kind: MoveKind,
}

impl Candidate {
    /// The move request for this candidate.
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_direction_order_is_dx_then_dy() {
        let deltas: Vec<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(
            deltas,
            vec![(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_midpoint_of_jump() {
        let a = Coord::new(0, 0);
        let b = Coord::new(2, 2);
        assert_eq!(a.midpoint(b), Coord::new(1, 1));
        assert_eq!(a.distance_squared(b), 8);
    }
}
