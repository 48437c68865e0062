//! Tests for the heuristic evaluator.

use leapfrog_rules::{Candidate, Coord, Game, Heuristic, MoveKind, Player};

fn candidate(x1: i32, y1: i32, x2: i32, y2: i32, kind: MoveKind) -> Candidate {
    Candidate::new(Coord::new(x1, y1), Coord::new(x2, y2), kind)
}

#[test]
fn test_chain_lookahead_scores() {
    let game = Game::with_pieces(
        5,
        [(0, 0, Player::Black), (1, 1, Player::White), (3, 3, Player::White)],
    )
    .unwrap();
    let heuristic = Heuristic::new();

    let scored: Vec<_> = game
        .legal_moves(Player::Black)
        .iter()
        .map(|c| (c.to, heuristic.evaluate(&game, Player::Black, c)))
        .collect();

    // Capture (+10), chain (+10), follow-up capture worth 10, then White's
    // 8 replies including 1 capture (-11)
    assert_eq!(
        scored,
        vec![
            (Coord::new(0, 1), Some(-15)),
            (Coord::new(1, 0), Some(-15)),
            (Coord::new(2, 2), Some(19)),
        ]
    );
    assert_eq!(heuristic.suggest(&game).as_deref(), Some("a1c3"));
}

#[test]
fn test_ties_keep_first_candidate() {
    let game = Game::with_pieces(3, [(1, 1, Player::Black)]).unwrap();
    let heuristic = Heuristic::new();

    for c in game.legal_moves(Player::Black) {
        assert_eq!(heuristic.evaluate(&game, Player::Black, &c), Some(0));
    }
    // North-west comes first in enumeration order
    assert_eq!(heuristic.suggest(&game).as_deref(), Some("b2a1"));
}

#[test]
fn test_long_chain_score() {
    let game = Game::with_pieces(
        9,
        [
            (0, 0, Player::Black),
            (1, 1, Player::White),
            (3, 3, Player::White),
            (5, 5, Player::White),
            (7, 7, Player::White),
        ],
    )
    .unwrap();
    let heuristic = Heuristic::new();

    let first_jump = candidate(0, 0, 2, 2, MoveKind::Capture);
    assert_eq!(heuristic.evaluate(&game, Player::Black, &first_jump), Some(13));
    assert_eq!(heuristic.best_move(&game), Some(first_jump));
}

#[test]
fn test_unplayable_candidate_scores_none() {
    let game = Game::with_pieces(3, [(0, 0, Player::Black), (1, 1, Player::White)]).unwrap();
    let wrong_owner = candidate(1, 1, 2, 2, MoveKind::Simple);
    assert_eq!(Heuristic::new().evaluate(&game, Player::Black, &wrong_owner), None);
}

#[test]
fn test_suggestion_is_deterministic() {
    let heuristic = Heuristic::new();
    for size in 3..=9 {
        let game = Game::new(size);
        let first = heuristic.suggest(&game);
        assert!(first.is_some(), "Default layout at size {} has moves", size);
        assert_eq!(heuristic.suggest(&game), first);
        assert_eq!(heuristic.suggest(&game.clone()), first);
    }
}

#[test]
fn test_suggestion_is_playable() {
    let heuristic = Heuristic::new();
    let mut game = Game::new(5);

    for _ in 0..20 {
        if game.is_finished().is_some() {
            break;
        }
        match heuristic.best_move(&game) {
            Some(choice) => assert!(
                game.try_play(choice.as_move()).is_ok(),
                "Suggested {} was rejected",
                choice.as_move()
            ),
            None => game.pass_turn(),
        }
    }
}

#[test]
fn test_blocked_player_passes() {
    // Every neighbour and every landing square around Black is occupied
    let game = Game::with_pieces(
        3,
        [
            (0, 0, Player::Black),
            (1, 0, Player::White),
            (2, 0, Player::White),
            (0, 1, Player::White),
            (1, 1, Player::White),
            (0, 2, Player::White),
            (2, 2, Player::White),
        ],
    )
    .unwrap();
    assert!(game.legal_moves(Player::Black).is_empty());
    assert_eq!(Heuristic::new().suggest(&game), None);
}
