use super::*;
use chess_core::{parse_uci_move, Move, SearchResult, Square};
use random_engine::RandomEngine;

/// Plays its moves in order, cycling when it runs out.
struct ScriptedEngine {
    name: &'static str,
    moves: Vec<&'static str>,
    next: usize,
}

impl ScriptedEngine {
    fn new(name: &'static str, moves: &[&'static str]) -> Self {
        Self {
            name,
            moves: moves.to_vec(),
            next: 0,
        }
    }
}

impl Engine for ScriptedEngine {
    fn search(&mut self, pos: &ChessBoard, _limits: SearchLimits) -> SearchResult {
        let txt = self.moves[self.next % self.moves.len()];
        self.next += 1;
        SearchResult {
            best_move: parse_uci_move(pos, txt).ok(),
            score: 0,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        self.name
    }

    fn new_game(&mut self) {
        self.next = 0;
    }
}

struct Resigner;

impl Engine for Resigner {
    fn search(&mut self, _pos: &ChessBoard, _limits: SearchLimits) -> SearchResult {
        SearchResult::no_move()
    }

    fn name(&self) -> &str {
        "Resigner"
    }
}

/// Always tries to push the e-pawn three squares.
struct IllegalMover;

impl Engine for IllegalMover {
    fn search(&mut self, _pos: &ChessBoard, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: Some(Move {
                from: Square::E2,
                to: Square::E5,
                promotion: None,
            }),
            ..SearchResult::no_move()
        }
    }

    fn name(&self) -> &str {
        "IllegalMover"
    }
}

fn runner(num_games: u32, max_plies: u32, alternate_colors: bool) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        first: SideConfig::new(1, None),
        second: SideConfig::new(1, None),
        max_plies,
        alternate_colors,
    })
}

#[test]
fn test_fools_mate_is_a_black_win() {
    let mut white = ScriptedEngine::new("White", &["f2f3", "g2g4"]);
    let mut black = ScriptedEngine::new("Black", &["e7e5", "d8h4"]);

    let record = runner(1, 100, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::BlackWins);
    assert_eq!(record.end, GameEnd::Rules(Termination::Checkmate));
    assert_eq!(record.plies, 4);
    assert_eq!(record.white_nodes, 2);
    assert_eq!(record.black_nodes, 2);
}

#[test]
fn test_threefold_repetition_is_a_draw() {
    let mut white = ScriptedEngine::new("White", &["g1f3", "f3g1"]);
    let mut black = ScriptedEngine::new("Black", &["g8f6", "f6g8"]);

    let record = runner(1, 100, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.end, GameEnd::Repetition);
    assert_eq!(record.plies, 8);
}

#[test]
fn test_ply_limit_is_a_draw() {
    let mut white = RandomEngine::with_seed(1);
    let mut black = RandomEngine::with_seed(2);

    let record = runner(1, 6, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.end, GameEnd::MoveLimit);
    assert_eq!(record.plies, 6);
}

#[test]
fn test_no_move_forfeits() {
    let mut white = RandomEngine::with_seed(1);
    let mut black = Resigner;

    let record = runner(1, 100, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::WhiteWins);
    assert_eq!(record.end, GameEnd::NoMove);
    assert_eq!(record.plies, 1);
}

#[test]
fn test_unparseable_move_forfeits() {
    let mut white = ScriptedEngine::new("White", &["e2e4", "g1f3"]);
    // Legal only from the start position, so Black's second move comes back
    // as no move at all.
    let mut black = ScriptedEngine::new("Black", &["e7e5", "e7e5"]);

    let record = runner(1, 100, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::WhiteWins);
    assert_eq!(record.end, GameEnd::NoMove);
    assert_eq!(record.plies, 3);
}

#[test]
fn test_illegal_move_forfeits() {
    let mut white = IllegalMover;
    let mut black = RandomEngine::with_seed(1);

    let record = runner(1, 100, false).play_game(
        &mut white,
        SideConfig::default(),
        &mut black,
        SideConfig::default(),
    );

    assert_eq!(record.outcome, Outcome::BlackWins);
    assert_eq!(record.end, GameEnd::IllegalMove);
    assert_eq!(record.plies, 0);
}

#[test]
fn test_colors_alternate() {
    let mut first = RandomEngine::with_seed(3);
    let mut second = ScriptedEngine::new("Scripted", &["g1f3", "f3g1", "g8f6", "f6g8"]);

    let summary = runner(2, 10, true).run_match(&mut first, &mut second);

    assert_eq!(summary.games.len(), 2);
    assert_eq!(summary.games[0].white, "Random");
    assert_eq!(summary.games[0].black, "Scripted");
    assert_eq!(summary.games[1].white, "Scripted");
    assert_eq!(summary.games[1].black, "Random");
}

#[test]
fn test_fixed_colors() {
    let mut first = RandomEngine::with_seed(4);
    let mut second = RandomEngine::with_seed(5);

    let summary = runner(3, 10, false).run_match(&mut first, &mut second);

    assert_eq!(summary.breakdown.total(), 3);
    for game in &summary.games {
        assert_eq!(game.white, "Random #1");
        assert_eq!(game.black, "Random #2");
    }
}

#[test]
fn test_alphabeta_beats_resigner_quickly() {
    let mut engine = alphabeta_engine::AlphaBetaEngine::<ChessBoard, _>::new(
        alphabeta_engine::PositionalEvaluator,
    );
    let mut resigner = Resigner;

    let summary = quick_match(&mut engine, &mut resigner, 1, 1);

    assert_eq!(summary.breakdown.white_wins, 1);
    assert_eq!(summary.first_score, 1.0);
    assert!(summary.average_nodes > 0);
}
