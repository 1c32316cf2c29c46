//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Any real engine
//! should beat it comfortably, which makes it the baseline opponent for
//! match runs.

use chess_core::{ChessBoard, Engine, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    /// Engine seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed seed; the same seed replays the same games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a legal move, or `None` if the game is over.
    pub fn select_move<P: Position>(&mut self, pos: &P) -> Option<P::Move> {
        if pos.is_terminal() {
            return None;
        }
        pos.legal_moves().choose(&mut self.rng).copied()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &ChessBoard, _limits: SearchLimits) -> SearchResult {
        match self.select_move(pos) {
            Some(mv) => SearchResult {
                best_move: Some(mv),
                score: 0,
                depth: 1,
                nodes: 1,
                stopped: false,
            },
            None => SearchResult::no_move(),
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
