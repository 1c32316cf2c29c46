//! Match harness for ML-chess engines
//!
//! This crate provides infrastructure for:
//! - Building engines from short command-line specs
//! - Playing matches between two engines with per-engine search limits
//! - Summarising results (outcome breakdown, win rate, nodes, game time)
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta as White against the random baseline
//! cargo run -p tournament -- match --white alphabeta --black random --games 10
//!
//! # Simple vs optimised alpha-beta, swapping colours every game
//! cargo run -p tournament -- match --white alphabeta-simple --black alphabeta \
//!     --white-depth 3 --black-depth 5 --move-time 1.5 --alternate-colors
//! ```

mod engines;
mod match_runner;
mod results;

pub use engines::*;
pub use match_runner::*;
pub use results::*;
