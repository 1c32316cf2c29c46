use super::*;
use chess_core::{move_to_uci, MATE_SCORE};

const MATE_IN_ONE_FEN: &str = "6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1";

fn board(fen: &str) -> ChessBoard {
    ChessBoard::from_fen(fen).unwrap()
}

fn positional() -> AlphaBetaEngine<ChessBoard, PositionalEvaluator> {
    AlphaBetaEngine::new(PositionalEvaluator)
}

#[test]
fn test_select_move_returns_legal_move() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    let mv = engine.select_move(&mut pos, 3, None).expect("a move");
    assert!(pos.legal_moves().contains(&mv));
}

#[test]
fn test_no_move_when_game_is_over() {
    let mut engine = positional();

    let mut mated = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(engine.select_move(&mut mated, 3, None), None);

    let mut stalemate = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(engine.select_move(&mut stalemate, 3, None), None);

    let mut fifty_moves = board("4k3/8/8/3q4/8/8/3R4/4K3 w - - 100 80");
    assert_eq!(engine.select_move(&mut fifty_moves, 3, None), None);
}

#[test]
fn test_startpos_depth_one_material_is_level() {
    let mut pos = ChessBoard::startpos();
    let mut engine = AlphaBetaEngine::new(MaterialEvaluator);

    let outcome = engine.search_position(&mut pos, 1, Deadline::none());
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.depth, 1);
    assert!(!outcome.stopped);
    assert!(outcome
        .best_move
        .is_some_and(|mv| pos.legal_moves().contains(&mv)));
}

#[test]
fn test_finds_back_rank_mate() {
    let mut pos = board(MATE_IN_ONE_FEN);
    let mut engine = positional();

    let outcome = engine.search_position(&mut pos, 2, Deadline::none());
    let mv = outcome.best_move.expect("a move");

    assert_eq!(move_to_uci(&pos, mv), "e1e8");
    assert!(outcome.score >= MATE_SCORE);
}

#[test]
fn test_finds_back_rank_mate_without_extras() {
    let mut pos = board(MATE_IN_ONE_FEN);
    let mut engine = AlphaBetaEngine::with_config(PositionalEvaluator, SearchConfig::simple());

    let mv = engine.select_move(&mut pos, 2, None).expect("a move");
    assert_eq!(move_to_uci(&pos, mv), "e1e8");
}

#[test]
fn test_expired_deadline_still_returns_legal_move() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    let outcome = engine.search_position(&mut pos, 6, Deadline::after(Duration::ZERO));
    assert!(outcome.stopped);
    assert_eq!(outcome.depth, 0);
    assert!(outcome
        .best_move
        .is_some_and(|mv| pos.legal_moves().contains(&mv)));
}

#[test]
fn test_zero_move_time_returns_legal_move() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    let mv = engine.select_move(&mut pos, 8, Some(Duration::ZERO));
    assert!(mv.is_some_and(|mv| pos.legal_moves().contains(&mv)));
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    let outcome = engine.search_position(&mut pos, 0, Deadline::none());
    assert_eq!(outcome.depth, 1);
    assert!(outcome.best_move.is_some());
}

#[test]
fn test_search_leaves_position_unchanged() {
    let mut pos = board("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
    let before = pos.fen();
    let key = pos.identity();
    let mut engine = positional();

    engine.select_move(&mut pos, 3, None);

    assert_eq!(pos.fen(), before);
    assert_eq!(pos.identity(), key);
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_counts_nodes() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    let outcome = engine.search_position(&mut pos, 2, Deadline::none());
    assert!(outcome.nodes > 20);
    assert_eq!(engine.nodes_visited(), outcome.nodes);
}

#[test]
fn test_table_persists_until_new_game() {
    let mut pos = ChessBoard::startpos();
    let mut engine = positional();

    engine.select_move(&mut pos, 3, None);
    let filled = engine.table().map_or(0, |tt| tt.len());
    assert!(filled > 0);

    // Second call at the same depth reuses the stored root entry
    engine.select_move(&mut pos, 3, None);
    assert!(engine.table().map_or(0, |tt| tt.len()) >= filled);

    Engine::new_game(&mut engine);
    assert!(engine.table().is_some_and(|tt| tt.is_empty()));
}

#[test]
fn test_table_disabled() {
    let config = SearchConfig {
        use_transposition_table: false,
        ..SearchConfig::default()
    };
    let mut pos = ChessBoard::startpos();
    let mut engine = AlphaBetaEngine::with_config(PositionalEvaluator, config);

    assert!(engine.select_move(&mut pos, 2, None).is_some());
    assert!(engine.table().is_none());
}

#[test]
fn test_engine_trait_search() {
    let pos = board(MATE_IN_ONE_FEN);
    let mut engine = positional();

    let result = engine.search(&pos, SearchLimits::depth(2));
    let mv = result.best_move.expect("a move");

    assert_eq!(move_to_uci(&pos, mv), "e1e8");
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
    assert!(!result.stopped);
}

#[test]
fn test_engine_names() {
    let full = positional();
    let simple = AlphaBetaEngine::<ChessBoard, _>::with_config(
        PositionalEvaluator,
        SearchConfig::simple(),
    );
    let named = positional().with_name("Custom");

    assert_eq!(full.name(), "AlphaBeta");
    assert_eq!(simple.name(), "AlphaBeta (simple)");
    assert_eq!(named.name(), "Custom");
}
