//! Command-line interface for leapfrog.

use crate::config::SeatKind;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use leapfrog_rules::{Player, parse_coord};
use std::path::PathBuf;

/// Leapfrog - jump-capture strategy game for the terminal
#[derive(Parser, Debug)]
#[command(name = "leapfrog")]
#[command(about = "Jump-capture strategy game on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Match config file (TOML); flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board size (3 to 9)
        #[arg(long)]
        size: Option<usize>,

        /// Who plays Black
        #[arg(long, value_enum)]
        black: Option<SeatKind>,

        /// Who plays White
        #[arg(long, value_enum)]
        white: Option<SeatKind>,

        /// Pause before automatic moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Stop after this many moves and passes
        #[arg(long)]
        max_turns: Option<usize>,

        /// Seed for random seats
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the heuristic's move for a position
    Suggest {
        /// Board size (3 to 9)
        #[arg(long, default_value = "7")]
        size: usize,

        /// Explicit placement such as "a1:b,c3:w"; default layout if absent
        #[arg(long)]
        pieces: Option<String>,

        /// Colour to move
        #[arg(long, value_enum, default_value = "black")]
        to_move: Side,
    },

    /// Print the rules
    Rules,
}

/// Colour argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    /// Black
    Black,
    /// White
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

/// Parses a placement list: comma-separated `cell:owner` entries where the
/// owner is `b` / `black` or `w` / `white`.
pub fn parse_pieces(list: &str) -> Result<Vec<(i32, i32, Player)>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (cell, owner) = entry
                .split_once(':')
                .with_context(|| format!("Expected cell:owner, got {:?}", entry))?;
            let at = parse_coord(cell)?;
            let owner = match owner.trim().to_ascii_lowercase().as_str() {
                "b" | "black" => Player::Black,
                "w" | "white" => Player::White,
                other => bail!("Unknown owner {:?} in {:?}", other, entry),
            };
            Ok((at.x, at.y, owner))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pieces() {
        let pieces = parse_pieces("a1:b, c3:W,b2:white").unwrap();
        assert_eq!(
            pieces,
            vec![(0, 0, Player::Black), (2, 2, Player::White), (1, 1, Player::White)]
        );
    }

    #[test]
    fn test_parse_pieces_rejects_bad_entries() {
        assert!(parse_pieces("a1").is_err());
        assert!(parse_pieces("a1:x").is_err());
        assert!(parse_pieces("11:b").is_err());
    }

    #[test]
    fn test_cli_parses_play_flags() {
        let cli = Cli::try_parse_from([
            "leapfrog",
            "play",
            "--size",
            "5",
            "--black",
            "random",
            "--white",
            "heuristic",
            "--seed",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                size, black, white, seed, ..
            } => {
                assert_eq!(size, Some(5));
                assert_eq!(black, Some(SeatKind::Random));
                assert_eq!(white, Some(SeatKind::Heuristic));
                assert_eq!(seed, Some(9));
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }
}
