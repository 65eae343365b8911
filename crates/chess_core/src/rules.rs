//! Terminal-state classification: check, checkmate, stalemate, draws.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::{Color, PieceKind, file_of, rank_of};

/// Why a position is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    FiftyMove,
    Repetition,
    InsufficientMaterial,
}

/// Derived status flags for a position. Always recomputed from the
/// position itself, never set by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw: Option<DrawKind>,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        self.checkmate || self.stalemate || self.draw.is_some()
    }
}

/// Classify the position for the side to move. `hash_history` holds the
/// hashes of every position reached so far in the game, including the
/// current one, and is only consulted for repetition.
pub fn game_status(pos: &Position, hash_history: &[u64]) -> GameStatus {
    let in_check = pos.in_check(pos.side_to_move);
    let no_moves = legal_moves(pos).is_empty();

    let checkmate = in_check && no_moves;
    let stalemate = !in_check && no_moves;

    let draw = if checkmate || stalemate {
        None
    } else if pos.is_fifty_move_draw() {
        Some(DrawKind::FiftyMove)
    } else if is_threefold_repetition(pos, hash_history) {
        Some(DrawKind::Repetition)
    } else if pos.is_insufficient_material() {
        Some(DrawKind::InsufficientMaterial)
    } else {
        None
    };

    GameStatus {
        in_check,
        checkmate,
        stalemate,
        draw,
    }
}

fn is_threefold_repetition(pos: &Position, hash_history: &[u64]) -> bool {
    let key = pos.position_hash();
    hash_history.iter().filter(|&&h| h == key).count() >= 3
}

impl Position {
    /// Fifty full moves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: K vs K, K+B vs K,
    /// K+N vs K, and K+B vs K+B with both bishops on the same color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0u32;
        let mut bishop_squares: Vec<u8> = Vec::new();

        for sq in 0..64u8 {
            let Some(pc) = self.piece_at(sq) else { continue };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => bishop_squares.push(sq),
                // Any pawn, rook, or queen is mating material.
                _ => return false,
            }
        }

        match (knights, bishop_squares.len()) {
            (0, 0) => true,
            (1, 0) => true,
            (0, 1) => true,
            (0, 2) => {
                // Same-colored bishops can never approach each other's king.
                // Requires one bishop per side to actually be dead.
                let colors: Vec<Color> = bishop_squares
                    .iter()
                    .filter_map(|&s| self.piece_at(s).map(|p| p.color))
                    .collect();
                if colors.len() == 2 && colors[0] == colors[1] {
                    return false;
                }
                let shade = |s: u8| (file_of(s) + rank_of(s)) % 2;
                shade(bishop_squares[0]) == shade(bishop_squares[1])
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
