//! One player-versus-engine sitting: the game, the grading of every
//! player move, and the difficulty dial that reacts to both.

use adaptive_engine::{DifficultyProfile, NoLegalMove, select_move};
use chess_core::{
    Color, Game, GameStatus, Move, MoveError, MoveKind, MoveRecord, PieceKind, to_fen,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::commentary::CommentaryRequest;
use crate::difficulty::{adaptive_difficulty, elo_to_difficulty, opponent_elo};
use crate::grade::{MoveEvaluation, grade_move};
use crate::stats::{GameResult, PlayerStats};

/// How many recent graded moves feed the difficulty dial.
const RECALIBRATION_WINDOW: usize = 10;

/// Outcome of one accepted player move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnReport {
    pub record: MoveRecord,
    pub evaluation: MoveEvaluation,
    pub status: GameStatus,
    /// Difficulty level in force for the opponent's reply.
    pub difficulty: u8,
}

pub struct GameSession {
    game: Game,
    difficulty: u8,
    stats: PlayerStats,
    evaluations: Vec<MoveEvaluation>,
    player: Color,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_stats(PlayerStats::default())
    }

    /// Start a session for a returning player; the opening difficulty
    /// comes straight from their rating.
    pub fn with_stats(stats: PlayerStats) -> Self {
        let difficulty = elo_to_difficulty(stats.skill_rating);
        tracing::info!(rating = stats.skill_rating, difficulty, "session started");
        Self {
            game: Game::new(),
            difficulty,
            stats,
            evaluations: Vec::new(),
            player: Color::White,
        }
    }

    pub fn player_color(&self) -> Color {
        self.player
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Graded player moves of the current game, in played order.
    pub fn evaluations(&self) -> &[MoveEvaluation] {
        &self.evaluations
    }

    /// Accept, grade, and record one player move. Rejection leaves the
    /// whole session untouched.
    pub fn submit_move(
        &mut self,
        from: u8,
        to: u8,
        promo: Option<PieceKind>,
    ) -> Result<TurnReport, MoveError> {
        let before = self.game.position().clone();
        let record = self.game.play(from, to, promo)?;
        let played = move_from_record(&record);

        let depth = DifficultyProfile::for_level(self.difficulty).search_depth;
        // The move was just accepted, so the position had legal moves.
        let evaluation =
            grade_move(&before, played, depth).expect("graded position has a legal move");

        tracing::debug!(
            san = %record.san,
            grade = ?evaluation.grade,
            loss = evaluation.centipawn_loss,
            "player move graded"
        );
        self.evaluations.push(evaluation);
        self.stats.record_move(&evaluation);
        self.recalibrate();

        Ok(TurnReport {
            record,
            evaluation,
            status: self.game.status(),
            difficulty: self.difficulty,
        })
    }

    /// Let the engine reply at the current difficulty. Terminal
    /// positions have no reply.
    pub fn opponent_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveRecord, NoLegalMove> {
        if self.game.status().is_terminal() {
            return Err(NoLegalMove);
        }
        let chosen = select_move(self.game.position(), self.difficulty, rng)?;
        let record = self.game.play_move(chosen.mv);
        tracing::debug!(san = %record.san, level = self.difficulty, "engine replied");
        Ok(record)
    }

    /// Result of the current game for the player, once it is terminal.
    pub fn result(&self) -> Option<GameResult> {
        let status = self.game.status();
        if status.checkmate {
            // The side to move in a mated position is the loser.
            let loser = self.game.position().side_to_move;
            Some(if loser == self.player {
                GameResult::Loss
            } else {
                GameResult::Win
            })
        } else if status.stalemate || status.draw.is_some() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Close the game with a result and settle the rating against the
    /// opponent's nominal strength. Returns the signed rating change.
    pub fn finish(&mut self, result: GameResult) -> i32 {
        let delta = self.stats.record_game(opponent_elo(self.difficulty, 0), result);
        tracing::info!(
            ?result,
            delta,
            rating = self.stats.skill_rating,
            "game finished"
        );
        delta
    }

    /// Reset the board for another game in the same sitting. The stats
    /// carry over; the per-game evaluations do not.
    pub fn new_game(&mut self) {
        self.game = Game::new();
        self.evaluations.clear();
        self.recalibrate();
    }

    /// Bundle the context a commentary backend needs for the latest
    /// graded move.
    pub fn commentary_request(&self) -> Option<CommentaryRequest> {
        let evaluation = *self.evaluations.last()?;
        let recent_moves = self
            .game
            .records()
            .iter()
            .rev()
            .take(4)
            .rev()
            .map(|r| r.san.clone())
            .collect();
        Some(CommentaryRequest {
            fen: to_fen(self.game.position()),
            evaluation,
            recent_moves,
            skill_rating: self.stats.skill_rating,
            average_accuracy: self.stats.average_accuracy,
        })
    }

    fn recalibrate(&mut self) {
        let base = elo_to_difficulty(self.stats.skill_rating);
        let start = self.evaluations.len().saturating_sub(RECALIBRATION_WINDOW);
        let next = adaptive_difficulty(base, &self.stats, &self.evaluations[start..]);
        if next != self.difficulty {
            tracing::debug!(from = self.difficulty, to = next, "difficulty recalibrated");
            self.difficulty = next;
        }
    }
}

/// Rebuild the `Move` a record was made from, for re-scoring it
/// against the position it was played in.
fn move_from_record(record: &MoveRecord) -> Move {
    Move {
        from: record.from,
        to: record.to,
        promo: record.promotion,
        is_en_passant: record.kind == MoveKind::EnPassant,
        is_castle: matches!(
            record.kind,
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        ),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
