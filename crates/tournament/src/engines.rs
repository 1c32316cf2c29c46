//! Engine specs accepted on the command line

use std::fmt;
use std::str::FromStr;

use alphabeta_engine::{AlphaBetaEngine, PositionalEvaluator, SearchConfig};
use chess_core::{ChessBoard, Engine};
use random_engine::RandomEngine;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown engine '{0}' (expected alphabeta, alphabeta-simple or random)")]
pub struct UnknownEngine(pub String);

/// Which engine to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSpec {
    /// Alpha-beta with table, quiescence and ordering (or a loaded config)
    AlphaBeta,
    /// Alpha-beta with every enhancement switched off
    AlphaBetaSimple,
    Random,
}

impl FromStr for EngineSpec {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alphabeta" | "ab" => Ok(Self::AlphaBeta),
            "alphabeta-simple" | "simple" => Ok(Self::AlphaBetaSimple),
            "random" => Ok(Self::Random),
            _ => Err(UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AlphaBeta => "alphabeta",
            Self::AlphaBetaSimple => "alphabeta-simple",
            Self::Random => "random",
        };
        f.write_str(s)
    }
}

impl EngineSpec {
    /// Builds the engine. `config` applies to [`EngineSpec::AlphaBeta`]
    /// only; `seed` to [`EngineSpec::Random`] only.
    pub fn build(self, config: &SearchConfig, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            Self::AlphaBeta => Box::new(AlphaBetaEngine::<ChessBoard, _>::with_config(
                PositionalEvaluator,
                config.clone(),
            )),
            Self::AlphaBetaSimple => Box::new(AlphaBetaEngine::<ChessBoard, _>::with_config(
                PositionalEvaluator,
                SearchConfig::simple(),
            )),
            Self::Random => Box::new(seed.map_or_else(RandomEngine::new, RandomEngine::with_seed)),
        }
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
