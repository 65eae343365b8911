//! Negamax search with alpha-beta pruning.
//!
//! Depth is bounded, so every call terminates; there is no time control
//! and no result can outlive the position it was computed for.

use chess_core::{Move, Position, legal_moves_into};

use crate::eval::evaluate_rel;

/// Score assigned to being checkmated at a node.
pub const MATE_SCORE: i32 = 100_000;

/// One legal root move with its search score, from the perspective of
/// the side to move in the searched position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedMove {
    pub mv: Move,
    pub score: i32,
}

/// Score every legal move for the side to move, sorted best-first.
///
/// Each root move is searched with a full window so that scores are
/// comparable across the whole list, which the selection tiers and the
/// grader both rely on.
pub fn rank_moves(pos: &Position, depth: u8) -> Vec<RankedMove> {
    let mut tmp = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let mut history = Vec::with_capacity((depth as usize) + 1);
    history.push(tmp.position_hash());

    let mut ranked = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = tmp.make_move(mv);
        history.push(tmp.position_hash());
        let score = -negamax(
            &mut tmp,
            depth.saturating_sub(1),
            i32::MIN / 2,
            i32::MAX / 2,
            &mut history,
        );
        history.pop();
        tmp.unmake_move(mv, undo);
        ranked.push(RankedMove { mv, score });
    }

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top-ranked move, if any legal move exists.
pub fn best_move(pos: &Position, depth: u8) -> Option<RankedMove> {
    rank_moves(pos, depth).into_iter().next()
}

/// Score of the position reached by playing `mv`, searched `depth`
/// plies below it, from the mover's perspective.
pub fn search_after(pos: &Position, mv: Move, depth: u8) -> i32 {
    let mut tmp = pos.clone();
    let mut history = vec![tmp.position_hash()];
    tmp.make_move(mv);
    history.push(tmp.position_hash());
    -negamax(&mut tmp, depth, i32::MIN / 2, i32::MAX / 2, &mut history)
}

fn negamax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    history: &mut Vec<u64>,
) -> i32 {
    // Immediate draw conditions
    if pos.is_fifty_move_draw() {
        return 0;
    }

    let curr_key = *history.last().unwrap_or(&pos.position_hash());
    let repeats = history.iter().filter(|&&k| k == curr_key).count();
    if repeats >= 3 {
        return 0; // threefold repetition draw
    }

    if pos.is_insufficient_material() {
        return 0;
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if moves.is_empty() {
        if pos.in_check(pos.side_to_move) {
            return -MATE_SCORE;
        }
        return 0; // Stalemate
    }
    if depth == 0 {
        return evaluate_rel(pos);
    }

    let mut best = i32::MIN + 1;
    for mv in moves {
        let undo = pos.make_move(mv);
        history.push(pos.position_hash());
        let score = -negamax(pos, depth - 1, -beta, -alpha, history);
        history.pop();
        pos.unmake_move(mv, undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
