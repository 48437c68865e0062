//! Leapfrog - terminal CLI
//!
//! Plays matches between human, heuristic and random seats.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use leapfrog::{
    Cli, Command, GameEvent, MatchConfig, Orchestrator, RULES, SeatKind, SharedInput, parse_pieces,
    seat_from_config, stdin_lines, write_event,
};
use leapfrog_rules::{Game, Heuristic, Player};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Play {
            config,
            size,
            black,
            white,
            delay_ms,
            max_turns,
            seed,
        } => {
            let mut config = load_match_config(config)?;
            if let Some(size) = size {
                config = config.with_size(size);
            }
            if let Some(kind) = black {
                let seat = config.black().clone().with_kind(kind);
                config = config.with_black(seat);
            }
            if let Some(kind) = white {
                let seat = config.white().clone().with_kind(kind);
                config = config.with_white(seat);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_delay_ms(delay_ms);
            }
            if let Some(max_turns) = max_turns {
                config = config.with_max_turns(max_turns);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_match(config.validated()?).await
        }
        Command::Suggest {
            size,
            pieces,
            to_move,
        } => run_suggest(size, pieces, to_move.into()),
        Command::Rules => {
            print!("{}", RULES);
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,leapfrog=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument]
fn load_match_config(path: Option<PathBuf>) -> Result<MatchConfig> {
    match path {
        Some(path) => Ok(MatchConfig::from_file(path)?),
        None => {
            debug!("No config file given, using defaults");
            Ok(MatchConfig::default())
        }
    }
}

/// Runs one match with a renderer task printing events as they arrive.
#[instrument(skip(config), fields(size = config.size()))]
async fn run_match(config: MatchConfig) -> Result<()> {
    let any_human = [Player::Black, Player::White]
        .iter()
        .any(|side| *config.seat(*side).kind() == SeatKind::Human);
    let input: SharedInput = if any_human {
        stdin_lines()
    } else {
        Arc::new(Mutex::new(mpsc::unbounded_channel().1))
    };

    let black = seat_from_config(&config, Player::Black, &input);
    let white = seat_from_config(&config, Player::White, &input);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let color = std::io::stdout().is_terminal();
    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = write_event(&mut stdout, &event, color) {
                warn!(error = %e, "Cannot write to stdout, stopping the renderer");
                break;
            }
        }
    });

    let mut orchestrator = Orchestrator::new(
        Game::new(*config.size()),
        black,
        white,
        event_tx,
        *config.max_turns(),
    );
    let result = orchestrator.run().await;
    drop(orchestrator);
    renderer.await?;

    let outcome = result?;
    info!(?outcome, "Match finished");
    Ok(())
}

#[instrument(skip(pieces))]
fn run_suggest(size: usize, pieces: Option<String>, to_move: Player) -> Result<()> {
    let mut game = match pieces {
        Some(list) => Game::with_pieces(size, parse_pieces(&list)?)?,
        None => Game::new(size),
    };
    game.set_current_player(to_move);

    let command = Heuristic::new()
        .suggest(&game)
        .unwrap_or_else(|| "pass".to_string());
    println!("{}", command);
    Ok(())
}
