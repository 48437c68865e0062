//! Grid storage, move classification and the primitive mutations.

use crate::error::SetupError;
use crate::notation::column_label;
use crate::types::{Coord, MAX_SIZE, MIN_SIZE, MoveKind, Piece, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square board of `size × size` cells, stored row-major.
///
/// The size never changes after construction. Pieces only move through
/// [`Board::apply_move`] and [`Board::apply_capture`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) size: usize,
    cells: Vec<Square>,
}

impl Board {
    /// Creates a board with the default triangular layout.
    ///
    /// `size` is clamped to 3..=9.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let mut board = Self::empty(size);
        board.fill_default_layout();
        board
    }

    /// Creates a board with no pieces.
    #[instrument]
    pub fn empty(size: usize) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            size,
            cells: vec![Square::Empty; size * size],
        }
    }

    /// Creates a board from an explicit placement list.
    ///
    /// Later entries overwrite earlier ones on the same cell.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if an entry lies outside the (clamped) board.
    #[instrument(skip(pieces))]
    pub fn with_pieces(
        size: usize,
        pieces: impl IntoIterator<Item = (i32, i32, Player)>,
    ) -> Result<Self, SetupError> {
        let mut board = Self::empty(size);
        for (x, y, owner) in pieces {
            let at = Coord::new(x, y);
            if !board.contains(at) {
                return Err(SetupError::new(format!(
                    "piece at ({}, {}) is outside a {}x{} board",
                    x, y, board.size, board.size
                )));
            }
            board.set(at, Square::Occupied(owner));
        }
        Ok(board)
    }

    /// Places both sides in opposite triangles split by the anti-diagonal.
    ///
    /// Black fills `x + y < n - 1`, White fills `x + y > n - 1`, and each
    /// side takes `(n - 1) / 2` cells from its own end of the anti-diagonal.
    /// The middle of the diagonal stays empty: one cell for odd sizes, two
    /// for even sizes.
    fn fill_default_layout(&mut self) {
        let n = self.size as i32;
        for i in 0..n {
            if 2 * i < n - 2 {
                self.set(Coord::new(i, n - 1 - i), Square::Occupied(Player::Black));
                self.set(Coord::new(n - 1 - i, i), Square::Occupied(Player::White));
            }
            for j in 0..i {
                self.set(Coord::new(j, n - 1 - i), Square::Occupied(Player::Black));
                self.set(Coord::new(n - 1 - j, i), Square::Occupied(Player::White));
            }
        }
        debug!(
            size = self.size,
            black = self.count(Player::Black),
            white = self.count(Player::White),
            "Default layout placed"
        );
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether a coordinate lies on the board.
    pub fn contains(&self, at: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&at.x) && (0..n).contains(&at.y)
    }

    fn index(&self, at: Coord) -> usize {
        at.y as usize * self.size + at.x as usize
    }

    /// Gets the square at `at`.
    ///
    /// Unchecked: panics if `at` is off the board.
    pub fn get(&self, at: Coord) -> Square {
        self.cells[self.index(at)]
    }

    /// Sets the square at `at`.
    ///
    /// Unchecked: panics if `at` is off the board.
    pub fn set(&mut self, at: Coord, square: Square) {
        let idx = self.index(at);
        self.cells[idx] = square;
    }

    /// Returns every occupied cell in row-major order (row by row, left to right).
    pub fn pieces(&self) -> Vec<Piece> {
        let n = self.size as i32;
        let mut result = Vec::new();
        for y in 0..n {
            for x in 0..n {
                if let Square::Occupied(owner) = self.get(Coord::new(x, y)) {
                    result.push(Piece::new(x, y, owner));
                }
            }
        }
        result
    }

    /// Counts the pieces of one player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Classifies the move `from → to`.
    ///
    /// - Off-board endpoint or empty source: Invalid.
    /// - Distance 1 or √2 onto an empty cell: Simple.
    /// - Distance 2 or √8 onto an empty cell over an opposing piece: Capture.
    /// - Anything else, including staying in place: Invalid.
    pub fn classify_move(&self, from: Coord, to: Coord) -> MoveKind {
        if !self.contains(from) || !self.contains(to) {
            return MoveKind::Invalid;
        }

        let Square::Occupied(mover) = self.get(from) else {
            return MoveKind::Invalid;
        };

        if !self.get(to).is_empty() {
            return MoveKind::Invalid;
        }

        match from.distance_squared(to) {
            1 | 2 => MoveKind::Simple,
            4 | 8 => match self.get(from.midpoint(to)) {
                Square::Occupied(jumped) if jumped != mover => MoveKind::Capture,
                _ => MoveKind::Invalid,
            },
            _ => MoveKind::Invalid,
        }
    }

    /// Relocates the piece at `from` to `to`, clearing the source.
    ///
    /// The caller must have classified the move as [`MoveKind::Simple`].
    pub fn apply_move(&mut self, from: Coord, to: Coord) {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, Square::Empty);
    }

    /// Relocates the piece at `from` to `to` and removes the jumped piece.
    ///
    /// The caller must have classified the move as [`MoveKind::Capture`].
    pub fn apply_capture(&mut self, from: Coord, to: Coord) {
        self.apply_move(from, to);
        self.set(from.midpoint(to), Square::Empty);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size as i32;
        for y in 0..n {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..n {
                let symbol = match self.get(Coord::new(x, y)) {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.symbol(),
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, " {}", column_label(x))?;
        }
        Ok(())
    }
}
