//! Adaptive chess opponent.
//!
//! Static evaluation and bounded negamax search provide a ranking of
//! legal moves; the difficulty profile then degrades the choice
//! stochastically so the opponent plays inside a target strength band.

pub mod eval;
pub mod profile;
pub mod search;
pub mod select;

pub use eval::{evaluate, evaluate_rel, piece_value};
pub use profile::{DEFAULT_PROFILE, DifficultyProfile, PROFILES, clamp_level};
pub use search::{MATE_SCORE, RankedMove, best_move, rank_moves, search_after};
pub use select::{NoLegalMove, select_move};
