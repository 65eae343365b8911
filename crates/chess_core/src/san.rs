//! Standard Algebraic Notation encoding.

use crate::board::Position;
use crate::movegen::{legal_moves, legal_moves_into};
use crate::types::{Color, Move, PieceKind, file_of, rank_of, sq_to_coord};

/// Render `mv` in SAN against the position it was played from.
///
/// The check/mate suffix is derived from the resulting position, so the
/// caller only supplies the pre-move state and the move itself.
pub fn to_san(pos: &Position, mv: Move) -> String {
    let piece = match pos.piece_at(mv.from) {
        Some(p) => p,
        None => return String::new(),
    };

    let after = pos.apply(mv);
    let suffix = check_suffix(&after);

    if mv.is_castle {
        let base = if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" };
        return format!("{base}{suffix}");
    }

    let is_capture = pos.piece_at(mv.to).is_some() || mv.is_en_passant;
    let dest = sq_to_coord(mv.to);

    let mut out = String::with_capacity(8);
    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                out.push((b'a' + (mv.from % 8)) as char);
                out.push('x');
            }
            out.push_str(&dest);
            if let Some(promo) = promotion_of(pos, mv) {
                out.push('=');
                out.push(promo.letter().unwrap_or('Q'));
            }
        }
        kind => {
            out.push(kind.letter().expect("non-pawn piece has a letter"));
            out.push_str(&disambiguation(pos, mv, kind));
            if is_capture {
                out.push('x');
            }
            out.push_str(&dest);
        }
    }
    out.push_str(&suffix);
    out
}

fn promotion_of(pos: &Position, mv: Move) -> Option<PieceKind> {
    let piece = pos.piece_at(mv.from)?;
    if piece.kind != PieceKind::Pawn {
        return None;
    }
    let last = match piece.color {
        Color::White => 7,
        Color::Black => 0,
    };
    if rank_of(mv.to) == last {
        Some(mv.promo.unwrap_or(PieceKind::Queen))
    } else {
        None
    }
}

/// Minimal origin disambiguation: file if unique, else rank, else both.
fn disambiguation(pos: &Position, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<Move> = legal_moves(pos)
        .into_iter()
        .filter(|m| {
            m.to == mv.to
                && m.from != mv.from
                && pos.piece_at(m.from).map(|p| p.kind) == Some(kind)
        })
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let from_file = file_of(mv.from);
    let from_rank = rank_of(mv.from);
    let file_clash = rivals.iter().any(|m| file_of(m.from) == from_file);
    let rank_clash = rivals.iter().any(|m| rank_of(m.from) == from_rank);

    let file_ch = (b'a' + mv.from % 8) as char;
    let rank_ch = (b'1' + mv.from / 8) as char;
    if !file_clash {
        file_ch.to_string()
    } else if !rank_clash {
        rank_ch.to_string()
    } else {
        format!("{file_ch}{rank_ch}")
    }
}

fn check_suffix(after: &Position) -> String {
    if !after.in_check(after.side_to_move) {
        return String::new();
    }
    let mut tmp = after.clone();
    let mut replies = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut replies);
    if replies.is_empty() {
        "#".to_string()
    } else {
        "+".to_string()
    }
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
