//! Difficulty calibration: mapping player strength and recent form onto
//! the opponent's level table.

use adaptive_engine::{DifficultyProfile, clamp_level};

use crate::grade::{Grade, MoveEvaluation, calculate_accuracy};
use crate::stats::PlayerStats;

/// Minimum graded-move sample before accuracy or blunder share may
/// move the level. Below this the signal is noise.
const MIN_SAMPLE: usize = 5;

/// Base level for a skill rating: one level per 200-point band, with
/// level 4 centered on the 1000-rating newcomer.
pub fn elo_to_difficulty(elo: u32) -> u8 {
    match elo {
        0..=500 => 1,
        501..=700 => 2,
        701..=900 => 3,
        901..=1100 => 4,
        1101..=1300 => 5,
        1301..=1500 => 6,
        1501..=1700 => 7,
        1701..=1900 => 8,
        1901..=2100 => 9,
        _ => 10,
    }
}

/// Nudge a base level by recent form, clamped to the profile table.
///
/// Sustained high accuracy and a win streak push the level up; low
/// accuracy, a heavy blunder share, or a losing streak pull it down.
pub fn adaptive_difficulty(base: u8, stats: &PlayerStats, recent: &[MoveEvaluation]) -> u8 {
    let mut level = base as i32;

    if recent.len() >= MIN_SAMPLE {
        let accuracy = calculate_accuracy(recent);
        if accuracy > 85.0 {
            level += 1;
        } else if accuracy < 50.0 {
            level -= 1;
        }

        let blunders = recent.iter().filter(|e| e.grade == Grade::Blunder).count();
        if blunders as f64 / recent.len() as f64 > 0.20 {
            level -= 1;
        }
    }

    if stats.current_streak >= 3 {
        level += 1;
    } else if stats.current_streak <= -3 {
        level -= 1;
    }

    clamp_level(level)
}

/// Nominal opponent rating for a level, used when scoring a finished
/// game against the player's ELO. `bonus` shifts the rating off the
/// table value, e.g. for a handicap game.
pub fn opponent_elo(level: u8, bonus: i32) -> u32 {
    DifficultyProfile::for_level(level)
        .target_elo
        .saturating_add_signed(bonus)
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
