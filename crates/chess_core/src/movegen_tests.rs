use super::*;
use crate::board::Position;
use crate::types::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    let positions = [
        Position::startpos(),
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"),
        Position::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2"),
    ];
    for pos in positions {
        let mover = pos.side_to_move;
        for mv in legal_moves(&pos) {
            let after = pos.apply(mv);
            assert!(
                !after.in_check(mover),
                "move {}->{} leaves own king attacked",
                mv.from,
                mv.to
            );
        }
    }
}

#[test]
fn test_legal_moves_from_single_origin() {
    let pos = Position::startpos();
    // Knight on b1 has exactly two destinations
    let knight_moves = legal_moves_from(&pos, 1);
    assert_eq!(knight_moves.len(), 2);
    // Empty square has none
    assert!(legal_moves_from(&pos, 35).is_empty());
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Black bishop on b4 pins the knight on c3 against the king on e1.
    let pos =
        Position::from_fen("rnbqk1nr/pppp1ppp/4p3/8/1b1P4/2N5/PPP1PPPP/R1BQKBNR w KQkq - 2 3");
    let moves = legal_moves(&pos);
    assert!(
        moves.iter().all(|m| m.from != 18),
        "pinned knight on c3 must not move"
    );
}

#[test]
fn test_en_passant_only_immediately_after_double_push() {
    let mut pos = Position::from_fen("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1");
    // d2-d4 exposes the en-passant target d3
    pos.make_move(Move::new(11, 27));
    assert_eq!(pos.en_passant, coord_to_sq("d3"));

    let ep = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_en_passant)
        .expect("en-passant capture available");
    assert_eq!(ep.to, coord_to_sq("d3").unwrap());

    // Any other move clears the target
    let mut other = pos.clone();
    other.make_move(Move::new(60, 59));
    assert_eq!(other.en_passant, None);
}

#[test]
fn test_castle_blocked_by_attack() {
    // Black rook on f8 covers f1, so white may not castle kingside.
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_castle));

    // Remove the rook and castling is available again.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&pos);
    assert!(moves.iter().any(|m| m.is_castle && m.to == 6));
}

#[test]
fn test_promotion_generates_all_four_choices() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .collect();
    assert_eq!(promos.len(), 4);
}
