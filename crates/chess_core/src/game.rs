//! Game history: an append-only sequence of position snapshots with a
//! cursor. Undo and redo are index movement, never mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::rules::{GameStatus, game_status};
use crate::san::to_san;
use crate::types::{Move, MoveKind, MoveRecord, PieceKind, file_of, rank_of};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The requested origin/destination pair is not in the legal set for
    /// the side to move. The position is left unchanged.
    #[error("illegal move from square {from} to {to}")]
    InvalidMove { from: u8, to: u8 },
}

/// A full game: every reached position, the records that connect them,
/// and a cursor pointing at the current snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    snapshots: Vec<Position>,
    records: Vec<MoveRecord>,
    cursor: usize,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(pos: Position) -> Self {
        let status = game_status(&pos, &[pos.position_hash()]);
        Self {
            snapshots: vec![pos],
            records: Vec::new(),
            cursor: 0,
            status,
        }
    }

    /// The current position snapshot.
    pub fn position(&self) -> &Position {
        &self.snapshots[self.cursor]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Records up to the cursor, in played order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records[..self.cursor]
    }

    /// Applied-move count at the cursor.
    pub fn ply(&self) -> usize {
        self.cursor
    }

    /// Play a move given as an origin/destination pair plus an optional
    /// promotion choice (queen when omitted). Pairs outside the legal
    /// set fail with [`MoveError::InvalidMove`] and change nothing.
    pub fn play(
        &mut self,
        from: u8,
        to: u8,
        promo: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let pos = self.position().clone();
        let mv = find_move(&pos, from, to, promo).ok_or(MoveError::InvalidMove { from, to })?;
        Ok(self.play_move(mv))
    }

    /// Play an already-validated `Move` (as produced by the generator or
    /// the selector). Panics only if the move never came from the legal
    /// set of the current position.
    pub fn play_move(&mut self, mv: Move) -> MoveRecord {
        let pos = self.position().clone();
        let record = build_record(&pos, mv);
        let next = pos.apply(mv);

        // A move played after undo discards the redo tail.
        self.snapshots.truncate(self.cursor + 1);
        self.records.truncate(self.cursor);

        self.snapshots.push(next);
        self.records.push(record.clone());
        self.cursor += 1;
        self.refresh_status();
        record
    }

    /// Step the cursor back one move. Returns false at the start.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.refresh_status();
        true
    }

    /// Step the cursor forward one move. Returns false at the tip.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        self.refresh_status();
        true
    }

    /// Numbered SAN movetext for the moves up to the cursor, suitable
    /// for a PGN-like export.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for (i, rec) in self.records().iter().enumerate() {
            if i % 2 == 0 {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{}.", i / 2 + 1));
            }
            out.push(' ');
            out.push_str(&rec.san);
        }
        out
    }

    fn refresh_status(&mut self) {
        let hashes: Vec<u64> = self.snapshots[..=self.cursor]
            .iter()
            .map(|p| p.position_hash())
            .collect();
        self.status = game_status(self.position(), &hashes);
    }
}

fn find_move(pos: &Position, from: u8, to: u8, promo: Option<PieceKind>) -> Option<Move> {
    legal_moves(pos).into_iter().find(|mv| {
        if mv.from != from || mv.to != to {
            return false;
        }
        match mv.promo {
            None => promo.is_none(),
            Some(pk) => pk == promo.unwrap_or(PieceKind::Queen),
        }
    })
}

fn build_record(pos: &Position, mv: Move) -> MoveRecord {
    let piece = pos.piece_at(mv.from).expect("legal move has a mover");
    let captured = if mv.is_en_passant {
        Some(PieceKind::Pawn)
    } else {
        pos.piece_at(mv.to).map(|p| p.kind)
    };

    let kind = if mv.is_castle {
        if file_of(mv.to) == 6 {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        }
    } else if mv.is_en_passant {
        MoveKind::EnPassant
    } else if piece.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
        MoveKind::DoublePush
    } else {
        MoveKind::Normal
    };

    let promotion = if piece.kind == PieceKind::Pawn && (rank_of(mv.to) == 7 || rank_of(mv.to) == 0)
    {
        Some(mv.promo.unwrap_or(PieceKind::Queen))
    } else {
        None
    };

    let san = to_san(pos, mv);
    let after = pos.apply(mv);

    MoveRecord {
        from: mv.from,
        to: mv.to,
        mover: piece.color,
        piece: piece.kind,
        captured,
        promotion,
        kind,
        gives_check: after.in_check(after.side_to_move),
        san,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
