// Posições concretas com resultado conhecido.

use minichess::engine::{GreedyEngine, MinimaxEngine, MoveSelector, RandomEngine};
use minichess::search::MATE_SCORE;
use minichess::*;

#[test]
fn depth_one_minimax_on_fresh_4x4_plays_a_legal_move() {
    let board = Board::new(Variant::Silverman4x4);
    let mut engine = MinimaxEngine::new(1, 7).unwrap();
    let mv = engine.get_move(&board).expect("white has moves in the opening");
    assert!(board.is_legal_move(mv));
}

#[test]
fn greedy_takes_the_only_rook_capture() {
    let board = Board::from_fen("k3/4/r3/R2K w - 0 1").unwrap();
    let legal = board.generate_legal_moves();
    let captures: Vec<&Move> = legal.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to_string(), "a1xa2");

    // Material 500, a2 não é casa central: sem bónus.
    assert_eq!(GreedyEngine::score_move(&board, *captures[0]), 500);
    let mut engine = GreedyEngine::new(123);
    assert_eq!(engine.get_move(&board), Some(*captures[0]));
}

#[test]
fn mated_side_to_move_loses() {
    let black_mated = Board::from_fen("k3/1Q2/1K2/4 b - 0 1").unwrap();
    assert!(black_mated.is_checkmate());
    assert_eq!(black_mated.status(), GameStatus::Checkmate);
    assert_eq!(black_mated.result().to_string(), "1-0");

    let white_mated = Board::from_fen("4/1k2/1q2/K3 w - 0 1").unwrap();
    assert!(white_mated.is_checkmate());
    assert_eq!(white_mated.result().to_string(), "0-1");
}

#[test]
fn stalemate_is_a_draw() {
    let board = Board::from_fen("k3/2Q1/1K2/4 b - 0 1").unwrap();
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.result(), GameResult::Draw);
    assert_eq!(RandomEngine::new(0).get_move(&board), None);
}

#[test]
fn halfmove_clock_at_threshold_is_a_draw() {
    let board = Board::from_fen("k3/4/4/3K w - 50 30").unwrap();
    assert!(!board.is_in_check(Color::White));
    assert!(board.is_draw_by_halfmove_clock());
    assert!(board.is_game_over());
    assert_eq!(board.status(), GameStatus::DrawByClock);
    assert_eq!(board.result().to_string(), "1/2-1/2");

    let before = Board::from_fen("k3/4/4/3K w - 49 30").unwrap();
    assert!(!before.is_game_over());
    assert_eq!(before.result().to_string(), "*");
}

#[test]
fn minimax_prefers_mate_over_material() {
    // Qb3 é mate; capturar a torre em d4 não é.
    let board = Board::from_fen("k2r/3Q/1K2/4 w - 0 1").unwrap();
    let mut engine = MinimaxEngine::new(2, 1).unwrap();
    let mv = engine.get_move(&board).unwrap();
    let mut after = board.clone();
    after.apply_move(mv).unwrap();
    assert!(after.is_checkmate(), "played {}", mv);
    assert_eq!(engine.last_result().map(|r| r.score), Some(MATE_SCORE));
}
