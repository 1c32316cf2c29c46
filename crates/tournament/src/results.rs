//! Game records and match summaries

use std::fmt;
use std::path::Path;

use chess_core::Termination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Game result from White's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// Checkmate or a drawn position under the rules
    Rules(Termination),
    /// Same position for the third time
    Repetition,
    /// Ply limit reached
    MoveLimit,
    /// An engine had no move in a live position and forfeits
    NoMove,
    /// An engine played an illegal move and forfeits
    IllegalMove,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub outcome: Outcome,
    pub end: GameEnd,
    pub plies: u32,
    pub white_nodes: u64,
    pub black_nodes: u64,
    pub duration_secs: f64,
}

impl GameRecord {
    pub fn total_nodes(&self) -> u64 {
        self.white_nodes + self.black_nodes
    }
}

/// Count of each game result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    #[serde(rename = "1-0")]
    pub white_wins: u32,
    #[serde(rename = "0-1")]
    pub black_wins: u32,
    #[serde(rename = "1/2-1/2")]
    pub draws: u32,
}

impl OutcomeCounts {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }
}

/// Results of a whole match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Engine that played White in the first game
    pub first: String,
    /// Engine that played Black in the first game
    pub second: String,
    pub breakdown: OutcomeCounts,
    /// (White wins + half the draws) / games, in [0, 1]
    pub white_win_rate: f64,
    /// Points scored by `first` across colours
    pub first_score: f64,
    pub average_nodes: u64,
    pub average_game_secs: f64,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn new(first: String, second: String, games: Vec<GameRecord>) -> Self {
        let mut breakdown = OutcomeCounts::default();
        let mut first_score = 0.0;
        let mut total_nodes = 0;
        let mut total_secs = 0.0;

        for game in &games {
            breakdown.add(game.outcome);
            total_nodes += game.total_nodes();
            total_secs += game.duration_secs;
            first_score += match game.outcome {
                Outcome::Draw => 0.5,
                Outcome::WhiteWins if game.white == first => 1.0,
                Outcome::BlackWins if game.black == first => 1.0,
                _ => 0.0,
            };
        }

        let n = games.len();
        let (white_win_rate, average_nodes, average_game_secs) = if n == 0 {
            (0.0, 0, 0.0)
        } else {
            (
                (breakdown.white_wins as f64 + 0.5 * breakdown.draws as f64) / n as f64,
                total_nodes / n as u64,
                total_secs / n as f64,
            )
        };

        Self {
            first,
            second,
            breakdown,
            white_win_rate,
            first_score,
            average_nodes,
            average_game_secs,
            games,
        }
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n", self.first, self.second));
        report.push_str(&format!(
            "Win rate for White: {:.1}% over {} games\n",
            self.white_win_rate * 100.0,
            self.breakdown.total()
        ));
        report.push_str(&format!(
            "Outcome breakdown: 1-0: {}, 0-1: {}, 1/2-1/2: {}\n",
            self.breakdown.white_wins, self.breakdown.black_wins, self.breakdown.draws
        ));
        report.push_str(&format!(
            "{} scored {:.1}/{}\n",
            self.first,
            self.first_score,
            self.breakdown.total()
        ));
        report.push_str(&format!(
            "Average nodes searched per game: {}\n",
            self.average_nodes
        ));
        report.push_str(&format!(
            "Average game time: {:.2} seconds\n",
            self.average_game_secs
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
