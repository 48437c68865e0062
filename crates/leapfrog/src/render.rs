//! Terminal rendering of the board and match events.

use crate::orchestrator::{GameEvent, MatchOutcome};
use crossterm::style::Stylize;
use leapfrog_rules::{Board, Coord, PlayOutcome, Player, Square, column_label};
use std::fmt::Write;
use std::io;

/// Draws the board as a box-drawing grid with column letters and 1-based
/// row numbers.
///
/// With `color` set, pieces are drawn as coloured discs; otherwise as the
/// plain `B` / `W` symbols.
pub fn render_board(board: &Board, color: bool) -> String {
    let n = board.size();
    let mut out = String::new();

    let labels: Vec<_> = (0..n).map(column_label).collect();
    let _ = writeln!(out, "     {}", labels.join("   "));

    out.push_str(&border('┌', '┬', '┐', n));
    for y in 0..n {
        let _ = write!(out, "{:>2} │", y + 1);
        for x in 0..n {
            let cell = render_square(board.get(Coord::new(x as i32, y as i32)), color);
            let _ = write!(out, " {} │", cell);
        }
        out.push('\n');
        if y + 1 < n {
            out.push_str(&border('├', '┼', '┤', n));
        }
    }
    out.push_str(&border('└', '┴', '┘', n));
    out
}

fn border(left: char, middle: char, right: char, n: usize) -> String {
    let cells = vec!["───"; n];
    let mut line = String::from("   ");
    line.push(left);
    line.push_str(&cells.join(&middle.to_string()));
    line.push(right);
    line.push('\n');
    line
}

fn render_square(square: Square, color: bool) -> String {
    match (square, color) {
        (Square::Empty, _) => " ".to_string(),
        (Square::Occupied(player), false) => player.symbol().to_string(),
        (Square::Occupied(Player::Black), true) => "●".dark_red().bold().to_string(),
        (Square::Occupied(Player::White), true) => "●".white().bold().to_string(),
    }
}

/// Boxed end-of-match banner.
pub fn render_banner(outcome: MatchOutcome, winner: Option<&str>) -> String {
    let message = match (outcome, winner) {
        (MatchOutcome::Winner(side), Some(name)) if name != side.to_string() => {
            format!("{} ({}) wins!", name, side)
        }
        (MatchOutcome::Winner(side), _) => format!("{} wins!", side),
        (MatchOutcome::Abandoned, _) => "Abandoned".to_string(),
        (MatchOutcome::TurnLimit, _) => "Turn limit reached".to_string(),
    };

    let width = message.chars().count().max(21) + 8;
    let pad = width - message.chars().count();
    let left = pad / 2;
    let right = pad - left;

    let mut out = String::new();
    let _ = writeln!(out, "┌{}┐", "─".repeat(width));
    let _ = writeln!(out, "│{}│", " ".repeat(width));
    let _ = writeln!(out, "│{}{}{}│", " ".repeat(left), message, " ".repeat(right));
    let _ = writeln!(out, "│{}│", " ".repeat(width));
    let _ = write!(out, "└{}┘", "─".repeat(width));
    out
}

/// Renders one event for the terminal.
pub fn render_event(event: &GameEvent, color: bool) -> String {
    match event {
        GameEvent::StateChanged(board) => render_board(board, color),
        GameEvent::AwaitingMove {
            name,
            automatic,
            forced,
            ..
        } => {
            let mut line = String::new();
            if !forced.is_empty() {
                let options: Vec<_> = forced.iter().map(ToString::to_string).collect();
                let _ = write!(line, "Capture chain: {}. ", options.join(", "));
            }
            if *automatic {
                let _ = write!(line, "{} is thinking...", name);
            } else {
                let _ = write!(line, "{}, your move (e.g. a1b2, pass, quit): ", name);
            }
            line
        }
        GameEvent::MoveMade { name, mv, outcome, .. } => match outcome {
            PlayOutcome::Moved => format!("{} plays {}", name, mv),
            PlayOutcome::Captured => format!("{} captures with {}", name, mv),
            PlayOutcome::ChainContinues => {
                format!("{} captures with {} and must jump again", name, mv)
            }
        },
        GameEvent::Passed { name, .. } => format!("{} passes", name),
        GameEvent::InvalidInput { name, reason } => format!("{}: {}. Try again.", name, reason),
        GameEvent::IllegalMove { name, reason } => format!("{}: {}. Try again.", name, reason),
        GameEvent::GameOver { outcome, winner } => render_banner(*outcome, winner.as_deref()),
    }
}

/// Writes one rendered event to `out` and flushes it.
///
/// Human prompts stay on the input line; everything else ends with a newline.
///
/// # Errors
///
/// Returns the first write or flush failure, e.g. a closed pipe.
pub fn write_event(out: &mut impl io::Write, event: &GameEvent, color: bool) -> io::Result<()> {
    let text = render_event(event, color);
    match event {
        GameEvent::AwaitingMove {
            automatic: false, ..
        } => write!(out, "{}", text)?,
        _ => writeln!(out, "{}", text)?,
    }
    out.flush()
}
