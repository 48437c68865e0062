//! Tests for the match loop.

use anyhow::Result;
use leapfrog::{
    GameEvent, HeuristicPlayer, HumanPlayer, MatchOutcome, Orchestrator, Player, RandomPlayer,
};
use leapfrog_rules::{Game, Player as Side};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Seat answering from a fixed list of commands, then quitting.
struct ScriptedPlayer {
    name: String,
    script: VecDeque<String>,
    automatic: bool,
}

impl ScriptedPlayer {
    fn new(name: &str, script: &[&str], automatic: bool) -> Self {
        Self {
            name: name.to_string(),
            script: script.iter().map(|s| s.to_string()).collect(),
            automatic,
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn next_command(&mut self, _game: &Game) -> Result<String> {
        Ok(self.script.pop_front().unwrap_or_else(|| "quit".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automatic(&self) -> bool {
        self.automatic
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_heuristic_vs_random_terminates() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Game::new(5),
        Box::new(HeuristicPlayer::new("Heuristic")),
        Box::new(RandomPlayer::seeded("Random", 11)),
        tx,
        200,
    );

    let outcome = orchestrator.run().await.unwrap();
    assert!(matches!(outcome, MatchOutcome::Winner(_) | MatchOutcome::TurnLimit));
    if let MatchOutcome::Winner(side) = outcome {
        assert_eq!(orchestrator.game().is_finished(), Some(side));
    }

    let events = drain(&mut rx);
    assert!(matches!(events.first(), Some(GameEvent::StateChanged(_))));
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
}

#[tokio::test]
async fn test_heuristic_wins_capture_position() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let game = Game::with_pieces(
        5,
        [(0, 0, Side::Black), (1, 1, Side::White), (3, 3, Side::White)],
    )
    .unwrap();
    let mut orchestrator = Orchestrator::new(
        game,
        Box::new(HeuristicPlayer::new("Heuristic")),
        Box::new(ScriptedPlayer::new("Idle", &[], true)),
        tx,
        10,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::Winner(Side::Black));

    let events = drain(&mut rx);
    let moves: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade { mv, .. } => Some(mv.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(moves, vec!["a1c3", "c3e5"]);
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { winner: Some(name), .. }) if name == "Heuristic"
    ));
}

#[tokio::test]
async fn test_human_bad_input_is_asked_again() {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    for line in ["hello", "e5d4", "a1c3"] {
        line_tx.send(line.to_string()).unwrap();
    }
    drop(line_tx);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let game = Game::with_pieces(3, [(0, 0, Side::Black), (1, 1, Side::White)]).unwrap();
    let mut orchestrator = Orchestrator::new(
        game,
        Box::new(HumanPlayer::new("Ada", Arc::new(Mutex::new(line_rx)))),
        Box::new(ScriptedPlayer::new("Idle", &[], true)),
        tx,
        10,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::Winner(Side::Black));

    let events = drain(&mut rx);
    let invalid = events
        .iter()
        .filter(|e| matches!(e, GameEvent::InvalidInput { .. }))
        .count();
    assert_eq!(invalid, 2, "Unparsable and off-board input are both rejected");
}

#[tokio::test]
async fn test_human_illegal_move_is_asked_again() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let game = Game::with_pieces(3, [(0, 0, Side::Black), (1, 1, Side::White)]).unwrap();
    let mut orchestrator = Orchestrator::new(
        game,
        Box::new(ScriptedPlayer::new("Ada", &["a1b2", "b2c3", "a1c3"], false)),
        Box::new(ScriptedPlayer::new("Idle", &[], true)),
        tx,
        10,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::Winner(Side::Black));
    let illegal = drain(&mut rx)
        .into_iter()
        .filter(|e| matches!(e, GameEvent::IllegalMove { .. }))
        .count();
    assert_eq!(illegal, 2);
}

#[tokio::test]
async fn test_automatic_illegal_move_fails() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Game::new(5),
        Box::new(ScriptedPlayer::new("Broken", &["a1a2"], true)),
        Box::new(ScriptedPlayer::new("Idle", &[], true)),
        tx,
        10,
    );

    let err = orchestrator.run().await.unwrap_err();
    assert!(err.to_string().contains("Broken"));
}

#[tokio::test]
async fn test_quit_abandons() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Game::new(5),
        Box::new(ScriptedPlayer::new("Ada", &["pass"], false)),
        Box::new(ScriptedPlayer::new("Bob", &["QUIT"], false)),
        tx,
        10,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::Abandoned);
    let events = drain(&mut rx);
    assert!(events.iter().any(|e| matches!(e, GameEvent::Passed { side: Side::Black, .. })));
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { outcome: MatchOutcome::Abandoned, winner: None })
    ));
}

#[tokio::test]
async fn test_turn_limit() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Game::new(5),
        Box::new(ScriptedPlayer::new("Ada", &["pass", "pass"], true)),
        Box::new(ScriptedPlayer::new("Bob", &["pass", "pass"], true)),
        tx,
        3,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::TurnLimit);
    assert_eq!(orchestrator.game().current_player(), Side::White);
}

#[tokio::test]
async fn test_finished_game_reports_immediately() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let game = Game::with_pieces(4, [(2, 2, Side::White)]).unwrap();
    let mut orchestrator = Orchestrator::new(
        game,
        Box::new(ScriptedPlayer::new("Ada", &[], false)),
        Box::new(ScriptedPlayer::new("Bob", &[], false)),
        tx,
        10,
    );

    assert_eq!(orchestrator.run().await.unwrap(), MatchOutcome::Winner(Side::White));
}
