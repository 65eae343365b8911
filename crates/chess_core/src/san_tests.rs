use super::*;
use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::*;

fn mv_from_coords(pos: &Position, from: &str, to: &str) -> Move {
    let f = coord_to_sq(from).unwrap();
    let t = coord_to_sq(to).unwrap();
    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == f && m.to == t)
        .expect("move should be legal")
}

#[test]
fn test_pawn_push_san() {
    let pos = Position::startpos();
    let mv = mv_from_coords(&pos, "e2", "e4");
    assert_eq!(to_san(&pos, mv), "e4");
}

#[test]
fn test_piece_move_san() {
    let pos = Position::startpos();
    let mv = mv_from_coords(&pos, "g1", "f3");
    assert_eq!(to_san(&pos, mv), "Nf3");
}

#[test]
fn test_pawn_capture_san() {
    let pos = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2");
    let mv = mv_from_coords(&pos, "e5", "d4");
    assert_eq!(to_san(&pos, mv), "exd4");
}

#[test]
fn test_check_suffix_san() {
    // Queen sortie to h5 gives check after 1.e4 f5
    let pos = Position::from_fen("rnbqkbnr/ppppp1pp/8/5p2/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2");
    let mv = mv_from_coords(&pos, "d1", "h5");
    assert_eq!(to_san(&pos, mv), "Qh5+");
}

#[test]
fn test_mate_suffix_san() {
    // Fool's mate finish: Qd8-h4#
    let pos = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2");
    let mv = mv_from_coords(&pos, "d8", "h4");
    assert_eq!(to_san(&pos, mv), "Qh4#");
}

#[test]
fn test_castle_san() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let ks = mv_from_coords(&pos, "e1", "g1");
    let qs = mv_from_coords(&pos, "e1", "c1");
    assert_eq!(to_san(&pos, ks), "O-O");
    assert_eq!(to_san(&pos, qs), "O-O-O");
}

#[test]
fn test_file_disambiguation_san() {
    // Rooks on a1 and f1 can both reach d1
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1");
    let mv = mv_from_coords(&pos, "a1", "d1");
    assert_eq!(to_san(&pos, mv), "Rad1");
}

#[test]
fn test_rank_disambiguation_san() {
    // Rooks on d1 and d5 can both reach d3
    let pos = Position::from_fen("4k3/8/8/3R4/8/8/8/3RK3 w - - 0 1");
    let mv = mv_from_coords(&pos, "d5", "d3");
    assert_eq!(to_san(&pos, mv), "R5d3");
}

#[test]
fn test_promotion_san() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let f = coord_to_sq("e7").unwrap();
    let t = coord_to_sq("e8").unwrap();
    let mv = legal_moves(&pos)
        .into_iter()
        .find(|m| m.from == f && m.to == t && m.promo == Some(PieceKind::Knight))
        .unwrap();
    assert_eq!(to_san(&pos, mv), "e8=N");
}

#[test]
fn test_en_passant_san() {
    let pos = Position::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1");
    let mv = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_en_passant)
        .unwrap();
    assert_eq!(to_san(&pos, mv), "exd3");
}
