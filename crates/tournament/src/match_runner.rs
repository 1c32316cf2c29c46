//! Match runner for playing games between engines

use std::time::{Duration, Instant};

use chess_core::{move_to_uci, ChessBoard, Color, Engine, Position, SearchLimits, Termination};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::results::{GameEnd, GameRecord, MatchSummary, Outcome};

/// Search limits for one engine. They travel with the engine when colours
/// are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideConfig {
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub move_time: Option<Duration>,
}

impl SideConfig {
    pub fn new(depth: u8, move_time: Option<Duration>) -> Self {
        Self { depth, move_time }
    }

    /// Fresh limits for one move; the clock starts when the search does.
    fn search_limits(&self) -> SearchLimits {
        match self.move_time {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

impl Default for SideConfig {
    fn default() -> Self {
        Self::new(4, None)
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Limits for the engine passed first to [`MatchRunner::run_match`]
    pub first: SideConfig,
    /// Limits for the engine passed second
    pub second: SideConfig,
    /// Plies after which the game is adjudicated a draw
    pub max_plies: u32,
    /// Whether the engines swap colours every game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            first: SideConfig::default(),
            second: SideConfig::default(),
            max_plies: 400,
            alternate_colors: false,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines.
    ///
    /// `first` plays White in the first game (and in every game unless
    /// colours alternate).
    pub fn run_match(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> MatchSummary {
        let mut first_name = first.name().to_string();
        let mut second_name = second.name().to_string();
        if first_name == second_name {
            // Self-play: keep the two sides apart in the records
            first_name.push_str(" #1");
            second_name.push_str(" #2");
        }
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;

            let mut record = if first_white {
                self.play_game(first, self.config.first, second, self.config.second)
            } else {
                self.play_game(second, self.config.second, first, self.config.first)
            };
            (record.white, record.black) = if first_white {
                (first_name.clone(), second_name.clone())
            } else {
                (second_name.clone(), first_name.clone())
            };

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = %record.outcome,
                end = ?record.end,
                plies = record.plies,
                "game finished"
            );
            games.push(record);
        }

        MatchSummary::new(first_name, second_name, games)
    }

    /// Play a single game from the start position.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        white_limits: SideConfig,
        black: &mut dyn Engine,
        black_limits: SideConfig,
    ) -> GameRecord {
        let mut pos = ChessBoard::startpos();
        white.new_game();
        black.new_game();

        let start = Instant::now();
        let mut white_nodes = 0;
        let mut black_nodes = 0;
        let mut seen = vec![pos.identity()];

        let (outcome, end) = loop {
            if let Some(termination) = pos.termination() {
                break (outcome_of(&pos, termination), GameEnd::Rules(termination));
            }
            if pos.ply() >= self.config.max_plies as usize {
                break (Outcome::Draw, GameEnd::MoveLimit);
            }

            let mover = pos.color_to_move();
            let result = if mover == Color::White {
                white.search(&pos, white_limits.search_limits())
            } else {
                black.search(&pos, black_limits.search_limits())
            };
            match mover {
                Color::White => white_nodes += result.nodes,
                Color::Black => black_nodes += result.nodes,
            }

            let Some(mv) = result.best_move else {
                warn!(?mover, "engine returned no move in a live position");
                break (win_for(!mover), GameEnd::NoMove);
            };
            debug!(ply = pos.ply(), mv = %move_to_uci(&pos, mv), score = result.score);

            if let Err(err) = pos.play(mv) {
                warn!(?mover, %err, "engine played an illegal move");
                break (win_for(!mover), GameEnd::IllegalMove);
            }

            let key = pos.identity();
            seen.push(key);
            if seen.iter().filter(|&&k| k == key).count() >= 3 {
                break (Outcome::Draw, GameEnd::Repetition);
            }
        };

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            outcome,
            end,
            plies: pos.ply() as u32,
            white_nodes,
            black_nodes,
            duration_secs: start.elapsed().as_secs_f64(),
        }
    }
}

fn win_for(color: Color) -> Outcome {
    match color {
        Color::White => Outcome::WhiteWins,
        Color::Black => Outcome::BlackWins,
    }
}

fn outcome_of(pos: &ChessBoard, termination: Termination) -> Outcome {
    match termination {
        // The side to move is the one mated
        Termination::Checkmate => win_for(!pos.color_to_move()),
        _ => Outcome::Draw,
    }
}

/// Quick utility to run a match at a fixed depth for both sides
pub fn quick_match(
    first: &mut dyn Engine,
    second: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchSummary {
    let side = SideConfig::new(depth, None);
    let config = MatchConfig {
        num_games,
        first: side,
        second: side,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(first, second)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
