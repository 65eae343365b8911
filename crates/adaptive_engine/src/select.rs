//! Opponent move selection with deliberate strength degradation.
//!
//! Search ranks the legal moves; the profile's blunder and error rates
//! then decide whether the opponent plays the best move or reaches into
//! a weaker tier. This injection, not search weakness alone, is what
//! keeps the opponent inside its target strength band.

use chess_core::Position;
use rand::Rng;
use thiserror::Error;

use crate::profile::DifficultyProfile;
use crate::search::{RankedMove, rank_moves};

/// Raised when selection is attempted on a terminal position. Callers
/// must check terminal status first; this is a contract violation, not
/// a user-facing error.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no legal move available; position is terminal")]
pub struct NoLegalMove;

/// Pick the opponent's move at the given difficulty level.
///
/// The random source is injected so tests can drive the tier choice
/// deterministically; no global generator is consulted.
pub fn select_move<R: Rng + ?Sized>(
    pos: &Position,
    level: u8,
    rng: &mut R,
) -> Result<RankedMove, NoLegalMove> {
    let profile = DifficultyProfile::for_level(level);
    let ranked = rank_moves(pos, profile.search_depth);
    if ranked.is_empty() {
        return Err(NoLegalMove);
    }

    let idx = degrade_choice(ranked.len(), &profile, rng);
    Ok(ranked[idx])
}

/// Tiered index choice: bottom third with probability `blunder_rate`,
/// else middle third with probability `error_rate`, else the top move.
fn degrade_choice<R: Rng + ?Sized>(n: usize, profile: &DifficultyProfile, rng: &mut R) -> usize {
    if n == 1 {
        return 0;
    }

    let third = n.div_ceil(3);
    if rng.gen::<f64>() < profile.blunder_rate {
        let start = n - third;
        return rng.gen_range(start..n);
    }
    if rng.gen::<f64>() < profile.error_rate {
        let start = third.min(n - 1);
        let end = (start + third).min(n);
        return rng.gen_range(start..end);
    }
    0
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
