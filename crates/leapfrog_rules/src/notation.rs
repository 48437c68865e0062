//! Coordinate text notation shared by human input and the automatic players.
//!
//! A cell is written as column letters followed by a 1-based row number:
//! `a1` is the top-left cell, `c3` is `(2, 2)`. Columns are bijective
//! base-26 and case-insensitive, so `z` is column 25 and `aa` column 26;
//! boards never exceed nine columns, but longer labels parse all the same.
//!
//! A move is two cells written back to back (`a1c3`). The reserved words
//! `pass` (or an empty line) and `quit` / `exit` / `q` are commands of their
//! own and can never be mistaken for a move.

use crate::types::{Coord, Move};
use tracing::instrument;

/// Error parsing player input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// The text is not a coordinate or coordinate pair.
    #[display("Malformed input {:?}", _0)]
    Malformed(String),

    /// The text parses but points outside the board.
    #[display("{} is outside a {}x{} board", input, size, size)]
    OutOfBounds {
        /// Offending input.
        input: String,
        /// Board size.
        size: usize,
    },
}

impl std::error::Error for NotationError {}

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a piece.
    Play(Move),
    /// Give up the turn.
    Pass,
    /// Abandon the match.
    Quit,
}

impl Command {
    /// Parses one line of input for a board of the given size.
    ///
    /// # Errors
    ///
    /// [`NotationError::Malformed`] if the text is neither a reserved word
    /// nor a coordinate pair, [`NotationError::OutOfBounds`] if either cell
    /// is off the board.
    #[instrument]
    pub fn parse(input: &str, size: usize) -> Result<Self, NotationError> {
        let text = input.trim().to_ascii_lowercase();

        match text.as_str() {
            "" | "pass" => return Ok(Command::Pass),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let malformed = || NotationError::Malformed(input.to_string());
        let (from, rest) = split_coord(&text).ok_or_else(malformed)?;
        let (to, rest) = split_coord(rest).ok_or_else(malformed)?;
        if !rest.is_empty() {
            return Err(malformed());
        }

        let n = size as i32;
        let on_board = |c: Coord| (0..n).contains(&c.x) && (0..n).contains(&c.y);
        if !on_board(from) || !on_board(to) {
            return Err(NotationError::OutOfBounds {
                input: input.trim().to_string(),
                size,
            });
        }

        Ok(Command::Play(Move::new(from, to)))
    }

    /// Renders the command in the same notation [`Command::parse`] accepts.
    pub fn to_notation(&self) -> String {
        match self {
            Command::Play(mv) => format_move(*mv),
            Command::Pass => "pass".to_string(),
            Command::Quit => "quit".to_string(),
        }
    }
}

/// Returns the letters naming column `x` (`0 → a`, `25 → z`, `26 → aa`).
pub fn column_label(x: usize) -> String {
    let mut n = x + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Formats a cell, e.g. `(2, 0)` as `c1`.
///
/// Cells with a negative coordinate have no name and are shown as `(x, y)`.
pub fn format_coord(at: Coord) -> String {
    if at.x < 0 || at.y < 0 {
        return format!("({}, {})", at.x, at.y);
    }
    format!("{}{}", column_label(at.x as usize), at.y + 1)
}

/// Formats a move as two concatenated cells, e.g. `a1c3`.
pub fn format_move(mv: Move) -> String {
    format!("{}{}", format_coord(mv.from), format_coord(mv.to))
}

/// Parses a single cell such as `c3` or `B2`.
///
/// # Errors
///
/// [`NotationError::Malformed`] if the text is not exactly one cell.
pub fn parse_coord(input: &str) -> Result<Coord, NotationError> {
    let text = input.trim().to_ascii_lowercase();
    match split_coord(&text) {
        Some((at, "")) => Ok(at),
        _ => Err(NotationError::Malformed(input.to_string())),
    }
}

/// Splits one cell off the front of lowercase `text`.
fn split_coord(text: &str) -> Option<(Coord, &str)> {
    let letters = text.bytes().take_while(u8::is_ascii_lowercase).count();
    let digits = text[letters..].bytes().take_while(u8::is_ascii_digit).count();
    if letters == 0 || digits == 0 {
        return None;
    }

    let column = text[..letters]
        .bytes()
        .try_fold(0i32, |acc, b| acc.checked_mul(26)?.checked_add(i32::from(b - b'a') + 1))?;
    let row: i32 = text[letters..letters + digits].parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((Coord::new(column - 1, row - 1), &text[letters + digits..]))
}
