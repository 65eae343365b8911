//! FEN encoding. Output-only: the inbound parser lives on
//! [`Position::from_fen`] and is used for fixtures, not persistence.

use crate::board::Position;
use crate::types::{Color, PieceKind, sq, sq_to_coord};

/// Render all six standard FEN fields for the position.
pub fn to_fen(pos: &Position) -> String {
    let mut out = String::with_capacity(80);

    // Ranks 8 down to 1, run-length encoding empty squares.
    for rank in (0..8i8).rev() {
        let mut empty = 0u32;
        for file in 0..8i8 {
            let s = sq(file, rank).expect("rank/file in range");
            match pos.piece_at(s) {
                None => empty += 1,
                Some(pc) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece_char(pc.color, pc.kind));
                }
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match pos.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let c = &pos.castling;
    if !(c.wk || c.wq || c.bk || c.bq) {
        out.push('-');
    } else {
        if c.wk {
            out.push('K');
        }
        if c.wq {
            out.push('Q');
        }
        if c.bk {
            out.push('k');
        }
        if c.bq {
            out.push('q');
        }
    }

    out.push(' ');
    match pos.en_passant {
        Some(s) => out.push_str(&sq_to_coord(s)),
        None => out.push('-'),
    }

    out.push(' ');
    out.push_str(&pos.halfmove_clock.to_string());
    out.push(' ');
    out.push_str(&pos.fullmove_number.to_string());

    out
}

fn piece_char(color: Color, kind: PieceKind) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
