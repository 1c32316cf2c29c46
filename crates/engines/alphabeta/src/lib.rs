//! Alpha-Beta Chess Engine
//!
//! Iterative deepening over a negamax alpha-beta search, with:
//! - A transposition table that persists across depths and across calls
//! - Quiescence search over captures at the horizon
//! - MVV-LVA capture ordering behind the table's remembered best move
//! - A wall-clock deadline polled at every node
//!
//! The search is generic over the rules engine ([`Position`]) and the
//! evaluator ([`Evaluator`]); [`Engine`] is implemented for chess.

mod config;
pub mod eval;
mod ordering;
mod search;
mod tt;

use std::time::Duration;

use chess_core::{
    ChessBoard, Deadline, Engine, Evaluator, Position, Score, SearchLimits, SearchResult,
    INFINITY,
};
use tracing::debug;

pub use config::{ConfigError, SearchConfig, DEFAULT_QUIESCENCE_MAX_PLY, DEFAULT_TT_CAPACITY};
pub use eval::{MaterialEvaluator, PositionalEvaluator};
pub use ordering::{mvv_lva, MoveOrderer};
pub use tt::{Bound, Entry, Replacement, TranspositionTable};

/// What one call to [`AlphaBetaEngine::search_position`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// Move of the deepest completed iteration. If not even depth 1
    /// completed, the move depth 1 found before the deadline.
    pub best_move: Option<M>,
    /// Root score of the iteration that produced `best_move`
    pub score: Score,
    /// Deepest iteration that completed (0 if none did)
    pub depth: u8,
    pub nodes: u64,
    /// True if an iteration was cut short by the deadline
    pub stopped: bool,
}

/// Iterative-deepening alpha-beta engine.
///
/// The transposition table belongs to the engine instance: it survives from
/// one depth to the next and from one call to the next, so results of an
/// earlier call seed the next one. [`AlphaBetaEngine::clear`] drops it.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine<P: Position, E> {
    evaluator: E,
    config: SearchConfig,
    orderer: MoveOrderer,
    table: Option<TranspositionTable<P::Move>>,
    deadline: Deadline,
    nodes: u64,
    stopped: bool,
    name: String,
}

impl<P: Position, E: Evaluator<P>> AlphaBetaEngine<P, E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, SearchConfig::default())
    }

    pub fn with_config(evaluator: E, config: SearchConfig) -> Self {
        let table = config
            .use_transposition_table
            .then(|| TranspositionTable::new(config.tt_capacity, config.replacement));
        let name = if config == SearchConfig::simple() {
            "AlphaBeta (simple)"
        } else {
            "AlphaBeta"
        };
        Self {
            evaluator,
            orderer: MoveOrderer::new(config.use_move_ordering),
            config,
            table,
            deadline: Deadline::none(),
            nodes: 0,
            stopped: false,
            name: name.to_string(),
        }
    }

    /// Overrides the name reported through [`Engine::name`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search (main and quiescence).
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Read-only view of the transposition table, if enabled.
    pub fn table(&self) -> Option<&TranspositionTable<P::Move>> {
        self.table.as_ref()
    }

    /// Forgets everything learned in earlier searches.
    pub fn clear(&mut self) {
        if let Some(tt) = self.table.as_mut() {
            tt.clear();
        }
        self.nodes = 0;
    }

    /// Picks a move for the side to move, or `None` if the game is over.
    ///
    /// Searches depth 1 to `max_depth` (at least 1) and stops early once
    /// `move_time` has elapsed. `pos` is left exactly as it was passed in.
    pub fn select_move(
        &mut self,
        pos: &mut P,
        max_depth: u8,
        move_time: Option<Duration>,
    ) -> Option<P::Move> {
        self.search_position(pos, max_depth, Deadline::from_move_time(move_time))
            .best_move
    }

    /// Iterative deepening driver behind [`AlphaBetaEngine::select_move`],
    /// returning the full outcome.
    pub fn search_position(
        &mut self,
        pos: &mut P,
        max_depth: u8,
        deadline: Deadline,
    ) -> SearchOutcome<P::Move> {
        self.nodes = 0;
        self.stopped = false;
        self.deadline = deadline;
        if let Some(tt) = self.table.as_mut() {
            tt.new_search();
        }

        let mut outcome = SearchOutcome {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        };

        for depth in 1..=max_depth.max(1) {
            let (score, mv) = self.negamax(pos, depth, -INFINITY, INFINITY, 0);

            if self.stopped {
                // A partial iteration only counts when nothing completed.
                if outcome.best_move.is_none() {
                    outcome.best_move = mv;
                    outcome.score = score;
                }
                outcome.stopped = true;
                debug!(depth, nodes = self.nodes, "iteration aborted by deadline");
                break;
            }

            outcome.depth = depth;
            outcome.score = score;
            if mv.is_some() {
                outcome.best_move = mv;
            }
            debug!(
                depth,
                score,
                nodes = self.nodes,
                best_move = ?outcome.best_move,
                "iteration complete"
            );

            if self.deadline.is_expired() {
                break;
            }
        }

        outcome.nodes = self.nodes;
        outcome
    }
}

impl<E: Evaluator<ChessBoard>> Engine for AlphaBetaEngine<ChessBoard, E> {
    fn search(&mut self, pos: &ChessBoard, limits: SearchLimits) -> SearchResult {
        let mut tmp = pos.clone();
        let outcome = self.search_position(&mut tmp, limits.depth, limits.start());

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
