pub mod board;
pub mod error;
pub mod position;
pub mod time_control;
pub mod uci;

pub use board::*;
pub use error::ChessError;
pub use position::*;
pub use time_control::*;
pub use uci::*;

// Rules-engine types that appear in the public API.
pub use cozy_chess::{Color, Move, Piece, Square};

// =============================================================================
// Engine trait: implemented by every move selector (alpha-beta, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: Score,
    /// Deepest iteration that completed
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a position with no legal moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all chess engines must implement.
///
/// This lets the match runner and the CLI swap between the alpha-beta
/// engine and the random baseline.
pub trait Engine {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth, time)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &ChessBoard, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear hash tables, etc.)
    fn new_game(&mut self) {}
}
