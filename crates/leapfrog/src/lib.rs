//! Leapfrog terminal game
//!
//! Seats, match loop and rendering around the [`leapfrog_rules`] engine.
//!
//! # Architecture
//!
//! - **Config**: TOML match settings with CLI overrides
//! - **Players**: human (stdin), heuristic and random seats
//! - **Orchestrator**: the match loop, reporting through [`GameEvent`]s
//! - **Render**: box-drawing board and end banner

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod orchestrator;
mod players;
mod render;
mod rules;

// Crate-level exports - CLI
pub use cli::{Cli, Command, Side, parse_pieces};

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, SeatConfig, SeatKind};

// Crate-level exports - Players
pub use players::{
    HeuristicPlayer, HumanPlayer, Player, RandomPlayer, SharedInput, seat_from_config, stdin_lines,
};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, MatchOutcome, Orchestrator};

// Crate-level exports - Rendering
pub use render::{render_banner, render_board, render_event, write_event};
pub use rules::RULES;
