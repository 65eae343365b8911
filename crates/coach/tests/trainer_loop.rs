//! Full training-loop integration: play, grade, recalibrate, settle.

use coach::{GameResult, GameSession, PlayerStats};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_full_game_loop_stays_consistent() {
    let mut session = GameSession::new();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..12 {
        if session.game().status().is_terminal() {
            break;
        }
        let best = adaptive_engine::best_move(session.game().position(), 2)
            .expect("non-terminal position has moves");
        let report = session
            .submit_move(best.mv.from, best.mv.to, best.mv.promo)
            .unwrap();

        assert!(report.evaluation.centipawn_loss >= 0);
        assert!((1..=10).contains(&report.difficulty));

        if report.status.is_terminal() {
            break;
        }
        if session.opponent_move(&mut rng).is_err() {
            break;
        }
    }

    let plies = session.game().ply();
    assert!(plies >= 2, "at least one full exchange was played");
    assert_eq!(session.evaluations().len(), plies.div_ceil(2));
    assert!(session.stats().average_accuracy <= 100.0);
    assert!(!session.game().transcript().is_empty());
}

#[test]
fn test_rating_settles_and_survives_reload() {
    let mut session = GameSession::with_stats(PlayerStats::default());
    session.finish(GameResult::Win);
    session.finish(GameResult::Loss);

    let path = std::env::temp_dir().join(format!("coach-loop-{}.json", std::process::id()));
    session.stats().save(&path).unwrap();
    let reloaded = PlayerStats::load(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded, *session.stats());
    assert_eq!(reloaded.games_played, 2);
    assert_eq!(reloaded.current_streak, -1);
}

#[test]
fn test_difficulty_follows_the_rating() {
    let strong = GameSession::with_stats(PlayerStats {
        skill_rating: 2200,
        ..PlayerStats::default()
    });
    let weak = GameSession::with_stats(PlayerStats {
        skill_rating: 400,
        ..PlayerStats::default()
    });
    assert_eq!(strong.difficulty(), 10);
    assert_eq!(weak.difficulty(), 1);
}
