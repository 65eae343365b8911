use super::*;
use crate::board::Position;
use crate::types::Move;

#[test]
fn test_startpos_fen() {
    let pos = Position::startpos();
    assert_eq!(
        to_fen(&pos),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn test_fen_round_trips_through_parser() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
        "8/8/8/4k3/8/4K3/8/8 b - - 42 60",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen);
        assert_eq!(to_fen(&pos), fen);
    }
}

#[test]
fn test_fen_after_double_push_has_ep_target() {
    let mut pos = Position::startpos();
    pos.make_move(Move::new(12, 28)); // e2-e4
    assert_eq!(
        to_fen(&pos),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_fen_no_castling_rights() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(to_fen(&pos), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
}
