use super::*;
use crate::grade::Grade;
use chess_core::coord_to_sq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sq(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

#[test]
fn test_submit_legal_move_reports_grade() {
    let mut session = GameSession::new();
    let report = session.submit_move(sq("e2"), sq("e4"), None).unwrap();
    assert_eq!(report.record.san, "e4");
    assert_eq!(session.evaluations().len(), 1);
    assert_eq!(report.evaluation.from, sq("e2"));
    assert!(!report.status.is_terminal());
    assert_eq!(session.result(), None);
}

#[test]
fn test_submit_illegal_move_changes_nothing() {
    let mut session = GameSession::new();
    let err = session.submit_move(sq("e2"), sq("e5"), None).unwrap_err();
    assert_eq!(
        err,
        MoveError::InvalidMove {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert_eq!(session.game().ply(), 0);
    assert!(session.evaluations().is_empty());
    assert_eq!(session.stats().graded_moves, 0);
}

#[test]
fn test_opponent_replies_with_legal_move() {
    let mut session = GameSession::new();
    session.submit_move(sq("e2"), sq("e4"), None).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let reply = session.opponent_move(&mut rng).unwrap();
    assert_eq!(reply.mover, chess_core::Color::Black);
    assert_eq!(session.game().ply(), 2);
}

#[test]
fn test_opponent_refuses_terminal_position() {
    let mut session = GameSession::new();
    // Fool's mate: the player walks into mate, so no reply exists.
    session.submit_move(sq("f2"), sq("f3"), None).unwrap();
    session.game_mut_play(sq("e7"), sq("e5"));
    session.submit_move(sq("g2"), sq("g4"), None).unwrap();
    session.game_mut_play(sq("d8"), sq("h4"));

    assert!(session.game().status().checkmate);
    assert_eq!(session.result(), Some(GameResult::Loss));
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(session.opponent_move(&mut rng), Err(NoLegalMove));
}

#[test]
fn test_playing_best_moves_keeps_accuracy_high() {
    let mut session = GameSession::new();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..4 {
        let depth = DifficultyProfile::for_level(session.difficulty()).search_depth;
        let best = adaptive_engine::best_move(session.game().position(), depth).unwrap();
        let report = session
            .submit_move(best.mv.from, best.mv.to, best.mv.promo)
            .unwrap();
        assert_eq!(report.evaluation.grade, Grade::Good);
        assert_eq!(report.evaluation.centipawn_loss, 0);
        if session.opponent_move(&mut rng).is_err() {
            break;
        }
    }
    assert_eq!(session.stats().average_accuracy, 85.0);
}

#[test]
fn test_finish_settles_rating_and_streak() {
    let mut session = GameSession::new();
    let delta = session.finish(GameResult::Win);
    assert_eq!(delta, 20);
    assert_eq!(session.stats().skill_rating, 1020);
    assert_eq!(session.stats().current_streak, 1);
    assert_eq!(session.stats().games_played, 1);
}

#[test]
fn test_new_game_resets_board_but_keeps_stats() {
    let mut session = GameSession::new();
    session.submit_move(sq("e2"), sq("e4"), None).unwrap();
    session.finish(GameResult::Win);
    session.new_game();

    assert_eq!(session.game().ply(), 0);
    assert!(session.evaluations().is_empty());
    assert_eq!(session.stats().games_played, 1);
    assert_eq!(session.stats().graded_moves, 1);
}

#[test]
fn test_returning_player_opens_at_rated_difficulty() {
    let stats = PlayerStats {
        skill_rating: 1650,
        ..PlayerStats::default()
    };
    let session = GameSession::with_stats(stats);
    assert_eq!(session.difficulty(), 7);
}

#[test]
fn test_commentary_request_carries_context() {
    let mut session = GameSession::new();
    assert!(session.commentary_request().is_none());

    session.submit_move(sq("e2"), sq("e4"), None).unwrap();
    let request = session.commentary_request().unwrap();
    assert_eq!(request.fen, chess_core::to_fen(session.game().position()));
    assert_eq!(request.recent_moves, vec!["e4".to_string()]);
    assert_eq!(request.skill_rating, 1000);
    assert_eq!(request.evaluation.from, sq("e2"));
}

impl GameSession {
    /// Test helper: force a reply without grading it, for scripted
    /// sequences like known mating lines.
    fn game_mut_play(&mut self, from: u8, to: u8) {
        self.game.play(from, to, None).unwrap();
    }
}
