//! Static position evaluation.
//!
//! Scores are centipawns, positive for White, independent of the side
//! to move, and antisymmetric under color mirroring: material,
//! piece-square preference, pawn structure, king safety, and mobility
//! are each computed per color and subtracted.

use chess_core::{Color, PieceKind, Position, file_of, rank_of, sq};

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Evaluate the position, positive favoring White.
pub fn evaluate(pos: &Position) -> i32 {
    side_score(pos, Color::White) - side_score(pos, Color::Black)
}

/// Evaluate from the side-to-move's perspective, for the search.
pub fn evaluate_rel(pos: &Position) -> i32 {
    match pos.side_to_move {
        Color::White => evaluate(pos),
        Color::Black => -evaluate(pos),
    }
}

const MOBILITY_WEIGHT: i32 = 2;
const DOUBLED_PAWN_PENALTY: i32 = 15;
const ISOLATED_PAWN_PENALTY: i32 = 12;
const SHIELD_PAWN_BONUS: i32 = 10;

fn side_score(pos: &Position, c: Color) -> i32 {
    let mut score = 0i32;

    for s in 0..64u8 {
        let Some(pc) = pos.piece_at(s) else { continue };
        if pc.color != c {
            continue;
        }
        score += piece_value(pc.kind);
        score += pst_value(pc.kind, s, c);
    }

    score += pawn_structure(pos, c);
    score += king_safety(pos, c);
    score += MOBILITY_WEIGHT * mobility(pos, c);

    score
}

/// Piece-square preference. Tables are written rank 8 first; White
/// squares are rank-flipped into them, Black squares index directly,
/// which keeps the term antisymmetric.
fn pst_value(kind: PieceKind, s: u8, c: Color) -> i32 {
    let idx = match c {
        Color::White => (s ^ 56) as usize,
        Color::Black => s as usize,
    };
    match kind {
        PieceKind::Pawn => PAWN_PST[idx],
        PieceKind::Knight => KNIGHT_PST[idx],
        PieceKind::Bishop => BISHOP_PST[idx],
        PieceKind::Rook => ROOK_PST[idx],
        PieceKind::Queen => QUEEN_PST[idx],
        PieceKind::King => KING_PST[idx],
    }
}

/// Doubled and isolated pawn penalties.
fn pawn_structure(pos: &Position, c: Color) -> i32 {
    let mut files = [0i32; 8];
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            if pc.color == c && pc.kind == PieceKind::Pawn {
                files[(s % 8) as usize] += 1;
            }
        }
    }

    let mut penalty = 0;
    for f in 0..8usize {
        let count = files[f];
        if count == 0 {
            continue;
        }
        if count > 1 {
            penalty += DOUBLED_PAWN_PENALTY * (count - 1);
        }
        let left = if f > 0 { files[f - 1] } else { 0 };
        let right = if f < 7 { files[f + 1] } else { 0 };
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY * count;
        }
    }
    -penalty
}

/// Pawn-shield bonus on the three files around the king, one rank ahead.
fn king_safety(pos: &Position, c: Color) -> i32 {
    let Some(ksq) = pos.king_sq(c) else { return 0 };
    let dir: i8 = match c {
        Color::White => 1,
        Color::Black => -1,
    };
    let kf = file_of(ksq);
    let kr = rank_of(ksq);

    let mut bonus = 0;
    for df in [-1, 0, 1] {
        if let Some(s) = sq(kf + df, kr + dir) {
            if let Some(pc) = pos.piece_at(s) {
                if pc.color == c && pc.kind == PieceKind::Pawn {
                    bonus += SHIELD_PAWN_BONUS;
                }
            }
        }
    }
    bonus
}

/// Geometric mobility count for knights, bishops, rooks, and queens.
/// Deliberately ignores the side to move and legality so that the term
/// stays cheap and mirror-antisymmetric.
fn mobility(pos: &Position, c: Color) -> i32 {
    const DIAG: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    const ORTHO: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    const KNIGHT: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];

    let mut count = 0i32;
    for s in 0..64u8 {
        let Some(pc) = pos.piece_at(s) else { continue };
        if pc.color != c {
            continue;
        }
        let f0 = file_of(s);
        let r0 = rank_of(s);
        match pc.kind {
            PieceKind::Knight => {
                for (df, dr) in KNIGHT {
                    if let Some(t) = sq(f0 + df, r0 + dr) {
                        if pos.piece_at(t).map(|p| p.color) != Some(c) {
                            count += 1;
                        }
                    }
                }
            }
            PieceKind::Bishop => count += slide_count(pos, c, f0, r0, &DIAG),
            PieceKind::Rook => count += slide_count(pos, c, f0, r0, &ORTHO),
            PieceKind::Queen => {
                count += slide_count(pos, c, f0, r0, &DIAG);
                count += slide_count(pos, c, f0, r0, &ORTHO);
            }
            _ => {}
        }
    }
    count
}

fn slide_count(pos: &Position, c: Color, f0: i8, r0: i8, dirs: &[(i8, i8)]) -> i32 {
    let mut count = 0;
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(t) = sq(f, r) {
            match pos.piece_at(t) {
                None => count += 1,
                Some(pc) => {
                    if pc.color != c {
                        count += 1;
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
    count
}

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
