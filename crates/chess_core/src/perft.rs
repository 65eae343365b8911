//! Perft: exhaustive legal-move tree counting, used to validate the
//! generator against known node counts.

use crate::board::Position;
use crate::movegen::legal_moves_into;

pub fn perft(pos: &Position, depth: u32) -> u64 {
    let mut tmp = pos.clone();
    perft_inner(&mut tmp, depth)
}

fn perft_inner(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let undo = pos.make_move(mv);
        nodes += perft_inner(pos, depth - 1);
        pos.unmake_move(mv, undo);
    }
    nodes
}
