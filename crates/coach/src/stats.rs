//! Persistent player record: ELO-style rating, streak, and a running
//! accuracy average, stored as JSON.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grade::MoveEvaluation;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to write stats file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stats: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a finished game from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Actual score for the ELO expectation formula.
    fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub skill_rating: u32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Consecutive wins (positive) or losses (negative); a draw leaves
    /// the streak untouched.
    pub current_streak: i32,
    /// Running average accuracy over every graded move on record.
    pub average_accuracy: f64,
    pub graded_moves: u64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            skill_rating: 1000,
            games_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            current_streak: 0,
            average_accuracy: 100.0,
            graded_moves: 0,
        }
    }
}

/// Rating-dependent K-factor: provisional players move fast, settled
/// players slowly.
fn k_factor(rating: u32) -> f64 {
    match rating {
        0..=1000 => 40.0,
        1001..=1400 => 32.0,
        1401..=2000 => 24.0,
        _ => 16.0,
    }
}

/// Signed rating change for a game at the given ratings and result.
pub fn calculate_elo_change(player: u32, opponent: u32, result: GameResult) -> i32 {
    let expected = 1.0 / (1.0 + 10f64.powf((opponent as f64 - player as f64) / 400.0));
    (k_factor(player) * (result.score() - expected)).round() as i32
}

impl PlayerStats {
    /// Apply a finished game: adjust the rating against the opponent's
    /// nominal ELO, update counters and the streak.
    pub fn record_game(&mut self, opponent_elo: u32, result: GameResult) -> i32 {
        let delta = calculate_elo_change(self.skill_rating, opponent_elo, result);
        self.skill_rating = self.skill_rating.saturating_add_signed(delta);
        self.games_played += 1;

        match result {
            GameResult::Win => {
                self.wins += 1;
                self.current_streak = self.current_streak.max(0) + 1;
            }
            GameResult::Loss => {
                self.losses += 1;
                self.current_streak = self.current_streak.min(0) - 1;
            }
            GameResult::Draw => {
                self.draws += 1;
            }
        }
        delta
    }

    /// Fold one graded move into the running accuracy average.
    pub fn record_move(&mut self, evaluation: &MoveEvaluation) {
        let score = evaluation.grade.accuracy_score();
        let n = self.graded_moves as f64;
        self.average_accuracy = (self.average_accuracy * n + score) / (n + 1.0);
        self.graded_moves += 1;
    }

    /// Load stats from a JSON file. Any failure, a missing file
    /// included, falls back to the defaults so a corrupt record can
    /// never block play.
    pub fn load(path: &Path) -> PlayerStats {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(stats) => stats,
                Err(err) => {
                    tracing::warn!(?path, %err, "unreadable stats file, starting fresh");
                    PlayerStats::default()
                }
            },
            Err(err) => {
                tracing::debug!(?path, %err, "no stats file, starting fresh");
                PlayerStats::default()
            }
        }
    }

    /// Persist the stats as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
