//! Training layer on top of the core rules and the adaptive opponent:
//! grades every player move, keeps a persistent player record, and
//! steers the opponent's difficulty from both.

pub mod commentary;
pub mod difficulty;
pub mod grade;
pub mod session;
pub mod stats;

pub use commentary::{
    Commentator, CommentaryError, CommentaryRequest, commentary_or_fallback, fallback_comment,
};
pub use difficulty::{adaptive_difficulty, elo_to_difficulty, opponent_elo};
pub use grade::{Grade, MoveEvaluation, calculate_accuracy, grade_move};
pub use session::{GameSession, TurnReport};
pub use stats::{GameResult, PlayerStats, StatsError, calculate_elo_change};
