//! Move grading by centipawn loss against the engine's own ranking.

use adaptive_engine::{NoLegalMove, rank_moves, search_after};
use chess_core::{Move, Position};
use serde::{Deserialize, Serialize};

/// Quality tier for one played move, ordered worst-last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Brilliant,
    Excellent,
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl Grade {
    /// Tier from the signed score drop against the reference best move.
    /// Negative loss means the played move scored above the reference,
    /// which happens when its deeper scoring uncovers something the
    /// ranking pass missed.
    pub fn from_loss(loss: i32) -> Grade {
        match loss {
            l if l <= -200 => Grade::Brilliant,
            l if l <= -50 => Grade::Excellent,
            l if l <= 0 => Grade::Good,
            l if l <= 50 => Grade::Inaccuracy,
            l if l <= 150 => Grade::Mistake,
            _ => Grade::Blunder,
        }
    }

    /// Per-move contribution to the accuracy average, on a 0-100 scale.
    pub fn accuracy_score(self) -> f64 {
        match self {
            Grade::Brilliant => 100.0,
            Grade::Excellent => 95.0,
            Grade::Good => 85.0,
            Grade::Inaccuracy => 65.0,
            Grade::Mistake => 40.0,
            Grade::Blunder => 15.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Brilliant => "Brilliant",
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Inaccuracy => "Inaccuracy",
            Grade::Mistake => "Mistake",
            Grade::Blunder => "Blunder",
        }
    }
}

/// The graded verdict on one played move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    pub from: u8,
    pub to: u8,
    pub grade: Grade,
    /// Score drop against the best move, floored at zero for reporting.
    pub centipawn_loss: i32,
    /// The move the engine would have played instead, absent when the
    /// played move already was the best.
    pub best_move: Option<Move>,
}

/// Grade the move `played` in `pos` at the given search depth.
///
/// The reference ranking and the played move are both scored from the
/// mover's perspective; a move identical to the reference best is
/// always a zero-loss [`Grade::Good`].
pub fn grade_move(pos: &Position, played: Move, depth: u8) -> Result<MoveEvaluation, NoLegalMove> {
    let ranked = rank_moves(pos, depth);
    let best = ranked.first().copied().ok_or(NoLegalMove)?;

    let (loss, best_move) = if played == best.mv {
        (0, None)
    } else {
        let played_score = search_after(pos, played, depth);
        (best.score - played_score, Some(best.mv))
    };

    Ok(MoveEvaluation {
        from: played.from,
        to: played.to,
        grade: Grade::from_loss(loss),
        centipawn_loss: loss.max(0),
        best_move,
    })
}

/// Average accuracy over a set of graded moves. An empty set is a
/// perfect 100, so a fresh game starts from the top.
pub fn calculate_accuracy(evaluations: &[MoveEvaluation]) -> f64 {
    if evaluations.is_empty() {
        return 100.0;
    }
    let total: f64 = evaluations.iter().map(|e| e.grade.accuracy_score()).sum();
    total / evaluations.len() as f64
}

#[cfg(test)]
#[path = "grade_tests.rs"]
mod grade_tests;
