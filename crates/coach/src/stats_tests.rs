use super::*;
use crate::grade::{Grade, MoveEvaluation};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("coach-stats-{name}-{}", std::process::id()))
}

fn eval(grade: Grade) -> MoveEvaluation {
    MoveEvaluation {
        from: 12,
        to: 28,
        grade,
        centipawn_loss: 0,
        best_move: None,
    }
}

#[test]
fn test_default_stats() {
    let stats = PlayerStats::default();
    assert_eq!(stats.skill_rating, 1000);
    assert_eq!(stats.games_played, 0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.average_accuracy, 100.0);
}

#[test]
fn test_elo_change_even_match() {
    assert_eq!(calculate_elo_change(1000, 1000, GameResult::Win), 20);
    assert_eq!(calculate_elo_change(1000, 1000, GameResult::Loss), -20);
    assert_eq!(calculate_elo_change(1000, 1000, GameResult::Draw), 0);
}

#[test]
fn test_elo_change_favors_the_underdog() {
    let upset = calculate_elo_change(1000, 1400, GameResult::Win);
    let expected_win = calculate_elo_change(1400, 1000, GameResult::Win);
    assert!(upset > expected_win);

    // Losing to a much stronger opponent costs little
    assert!(calculate_elo_change(1000, 1800, GameResult::Loss) > -5);
}

#[test]
fn test_k_factor_shrinks_with_rating() {
    let novice = calculate_elo_change(800, 800, GameResult::Win);
    let expert = calculate_elo_change(2200, 2200, GameResult::Win);
    assert_eq!(novice, 20);
    assert_eq!(expert, 8);
}

#[test]
fn test_record_game_updates_streak() {
    let mut stats = PlayerStats::default();
    stats.record_game(1000, GameResult::Win);
    stats.record_game(1000, GameResult::Win);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.wins, 2);

    // A draw holds the streak in place
    stats.record_game(1000, GameResult::Draw);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.draws, 1);

    // A loss flips it to -1, not merely decrements
    stats.record_game(1000, GameResult::Loss);
    assert_eq!(stats.current_streak, -1);
    stats.record_game(1000, GameResult::Loss);
    assert_eq!(stats.current_streak, -2);
    assert_eq!(stats.games_played, 5);
}

#[test]
fn test_record_game_moves_rating() {
    let mut stats = PlayerStats::default();
    let delta = stats.record_game(1000, GameResult::Win);
    assert_eq!(delta, 20);
    assert_eq!(stats.skill_rating, 1020);
}

#[test]
fn test_record_move_running_average() {
    let mut stats = PlayerStats::default();
    stats.record_move(&eval(Grade::Good));
    assert_eq!(stats.average_accuracy, 85.0);
    stats.record_move(&eval(Grade::Blunder));
    assert_eq!(stats.average_accuracy, 50.0);
    assert_eq!(stats.graded_moves, 2);
}

#[test]
fn test_save_and_load_round_trip() {
    let path = scratch_path("roundtrip");
    let mut stats = PlayerStats::default();
    stats.record_game(1200, GameResult::Win);
    stats.record_move(&eval(Grade::Excellent));

    stats.save(&path).unwrap();
    let loaded = PlayerStats::load(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, stats);
}

#[test]
fn test_load_missing_file_defaults() {
    let stats = PlayerStats::load(Path::new("/nonexistent/coach-stats.json"));
    assert_eq!(stats, PlayerStats::default());
}

#[test]
fn test_load_malformed_file_defaults() {
    let path = scratch_path("malformed");
    std::fs::write(&path, "{not json at all").unwrap();
    let stats = PlayerStats::load(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(stats, PlayerStats::default());
}
