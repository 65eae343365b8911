//! Zobrist hashing for chess positions.
//!
//! The hash is computed by XOR-ing together fixed pseudo-random values
//! for each piece on each square, the side to move, the castling rights,
//! and the en-passant file. Halfmove clock and fullmove number are
//! deliberately excluded so that repeated positions hash equal, which is
//! what threefold-repetition detection needs.

use crate::board::Position;
use crate::types::{Color, Piece, file_of};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each piece on each square.
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// Random value for black to move (XOR when black's turn)
    pub side_to_move: u64,
    /// Random values for castling rights [wk, wq, bk, bq]
    pub castling: [u64; 4],
    /// Random values for en passant file (0-7)
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using a simple PRNG with fixed seed.
    /// Uses xorshift64 for fast, reproducible random numbers.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64; // Fixed seed

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    /// Get the Zobrist key for a piece on a square.
    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

impl Position {
    /// Full-scan position hash. Equal for repeated positions regardless
    /// of move clocks.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for sq in 0..64u8 {
            if let Some(pc) = self.piece_at(sq) {
                h ^= ZOBRIST.piece_key(pc, sq);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        if self.castling.wk {
            h ^= ZOBRIST.castling[0];
        }
        if self.castling.wq {
            h ^= ZOBRIST.castling[1];
        }
        if self.castling.bk {
            h ^= ZOBRIST.castling[2];
        }
        if self.castling.bq {
            h ^= ZOBRIST.castling[3];
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.en_passant[file_of(ep) as usize];
        }
        h
    }
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
