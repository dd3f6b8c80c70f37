// Torneios paralelos: totais consistentes e resultados reprodutíveis.

use minichess::engine::{Arena, EngineSpec, MatchConfig};
use minichess::*;

fn config(threads: usize) -> MatchConfig {
    MatchConfig {
        variant: Variant::Silverman4x5,
        first: EngineSpec::Greedy,
        second: EngineSpec::Random,
        games: 8,
        threads,
        seed: 42,
        swap_colors: true,
        max_plies: Some(60),
    }
}

#[test]
fn totals_equal_games_played() {
    let report = Arena::run(&config(3)).unwrap();
    assert_eq!(report.games_played(), 8);
    assert_eq!(report.first_wins + report.second_wins + report.draws + report.unfinished, 8);
    assert!(report.games.iter().all(|g| g.plies <= 60));
    assert!(report.average_plies() <= 60.0);
}

#[test]
fn results_do_not_depend_on_thread_count() {
    let single = Arena::run(&config(1)).unwrap();
    let parallel = Arena::run(&config(4)).unwrap();
    assert_eq!(single, parallel);
}

#[test]
fn game_logs_replay_to_the_reported_position() {
    let report = Arena::run(&config(2)).unwrap();
    for game in &report.games {
        let board = Board::replay_log(Variant::Silverman4x5.config(), &game.move_log).unwrap();
        assert_eq!(board.to_fen(), game.final_fen);
        assert_eq!(board.history_len(), game.plies);
    }
}

#[test]
fn without_swapping_the_first_engine_is_always_white() {
    let report = Arena::run(&MatchConfig { swap_colors: false, games: 3, ..config(2) }).unwrap();
    assert!(report.games.iter().all(|g| g.first_color == Color::White));
}
