//! Coaching commentary on graded moves.
//!
//! The commentary backend is a trait so the session logic stays
//! independent of where the words come from; a canned per-grade line is
//! always available as a fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grade::{Grade, MoveEvaluation};

#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("commentary backend unavailable: {0}")]
    Unavailable(String),
}

/// Everything a backend needs to phrase advice about one move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommentaryRequest {
    /// Position after the move, in FEN.
    pub fen: String,
    pub evaluation: MoveEvaluation,
    /// SAN of the last few moves, for context.
    pub recent_moves: Vec<String>,
    pub skill_rating: u32,
    pub average_accuracy: f64,
}

pub trait Commentator {
    fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError>;
}

/// Canned line for a grade, used when no backend is wired up or the
/// backend fails.
pub fn fallback_comment(grade: Grade) -> &'static str {
    match grade {
        Grade::Brilliant => "Brilliant! You found something the engine undervalued.",
        Grade::Excellent => "Excellent move, right in line with the best play.",
        Grade::Good => "Good, solid move.",
        Grade::Inaccuracy => "A slight inaccuracy; there was a more precise option.",
        Grade::Mistake => "That move gives up real ground. Look for the better reply.",
        Grade::Blunder => "A blunder. Check what your opponent can do to you now.",
    }
}

/// Ask the backend, fall back to the canned line on failure.
pub fn commentary_or_fallback<C: Commentator>(
    commentator: &C,
    request: &CommentaryRequest,
) -> String {
    match commentator.comment(request) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%err, "commentary backend failed, using canned line");
            fallback_comment(request.evaluation.grade).to_string()
        }
    }
}
