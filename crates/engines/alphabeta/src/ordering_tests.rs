use super::*;
use chess_core::{move_to_uci, parse_uci_move, ChessBoard};

// Pawn c4 can take the queen on b5 or the rook on d5; the queen on h1 can
// also take the rook.
const CAPTURES_FEN: &str = "4k3/8/8/1q1r4/2P5/8/8/4K2Q w - - 0 1";

fn uci_list(pos: &ChessBoard, moves: &[chess_core::Move]) -> Vec<String> {
    moves.iter().map(|&mv| move_to_uci(pos, mv)).collect()
}

#[test]
fn test_captures_first_in_mvv_lva_order() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let ordered = MoveOrderer::default().order(&pos, false, None);

    assert_eq!(
        uci_list(&pos, &ordered[..3]),
        vec!["c4b5", "c4d5", "h1d5"]
    );
    assert!(ordered[3..].iter().all(|&mv| !pos.is_capture(mv)));
    assert_eq!(ordered.len(), pos.legal_moves().len());
}

#[test]
fn test_mvv_lva_scores() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let pxq = parse_uci_move(&pos, "c4b5").unwrap();
    let qxr = parse_uci_move(&pos, "h1d5").unwrap();
    let quiet = parse_uci_move(&pos, "e1e2").unwrap();

    assert_eq!(mvv_lva(&pos, pxq), 10 * 5 - 1);
    assert_eq!(mvv_lva(&pos, qxr), 10 * 4 - 5);
    assert_eq!(mvv_lva(&pos, quiet), 0);
}

#[test]
fn test_captures_only() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let ordered = MoveOrderer::default().order(&pos, true, None);

    assert_eq!(uci_list(&pos, &ordered), vec!["c4b5", "c4d5", "h1d5"]);
}

#[test]
fn test_quiet_moves_keep_generator_order() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let ordered = MoveOrderer::default().order(&pos, false, None);

    let quiet_ordered: Vec<_> = ordered.into_iter().filter(|&m| !pos.is_capture(m)).collect();
    let quiet_generated: Vec<_> = pos
        .legal_moves()
        .into_iter()
        .filter(|&m| !pos.is_capture(m))
        .collect();
    assert_eq!(quiet_ordered, quiet_generated);
}

#[test]
fn test_table_move_goes_first() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let quiet = parse_uci_move(&pos, "e1e2").unwrap();
    let ordered = MoveOrderer::default().order(&pos, false, Some(quiet));

    assert_eq!(ordered[0], quiet);
    assert_eq!(
        uci_list(&pos, &ordered[1..4]),
        vec!["c4b5", "c4d5", "h1d5"]
    );
    assert_eq!(ordered.len(), pos.legal_moves().len());
}

#[test]
fn test_table_move_not_in_candidates_is_ignored() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let quiet = parse_uci_move(&pos, "e1e2").unwrap();
    let ordered = MoveOrderer::default().order(&pos, true, Some(quiet));

    assert_eq!(uci_list(&pos, &ordered), vec!["c4b5", "c4d5", "h1d5"]);
}

#[test]
fn test_ordering_disabled_keeps_generator_order() {
    let pos = ChessBoard::from_fen(CAPTURES_FEN).unwrap();
    let ordered = MoveOrderer::new(false).order(&pos, false, None);

    assert_eq!(ordered, pos.legal_moves());
}
