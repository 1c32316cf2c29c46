//! Tournament CLI
//!
//! Play matches between engines, or ask one engine for a move.

use std::path::PathBuf;
use std::time::Duration;

use alphabeta_engine::SearchConfig;
use anyhow::{Context, Result};
use chess_core::{move_to_uci, ChessBoard, SearchLimits};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tournament::{EngineSpec, MatchConfig, MatchRunner, SideConfig};

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "ML-chess match runner")]
struct Cli {
    /// Alpha-beta search configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a series of games between two engines
    Match {
        /// Engine playing White in the first game (alphabeta, alphabeta-simple, random)
        #[arg(long, default_value = "alphabeta")]
        white: EngineSpec,

        /// Engine playing Black in the first game
        #[arg(long, default_value = "random")]
        black: EngineSpec,

        /// Number of games to play
        #[arg(long, short = 'g', default_value_t = 10)]
        games: u32,

        /// Search depth of the --white engine
        #[arg(long, default_value_t = 4)]
        white_depth: u8,

        /// Search depth of the --black engine
        #[arg(long, default_value_t = 4)]
        black_depth: u8,

        /// Seconds per move for both engines
        #[arg(long)]
        move_time: Option<f64>,

        /// Seconds per move for the --white engine (overrides --move-time)
        #[arg(long)]
        white_move_time: Option<f64>,

        /// Seconds per move for the --black engine (overrides --move-time)
        #[arg(long)]
        black_move_time: Option<f64>,

        /// Swap colours after every game
        #[arg(long)]
        alternate_colors: bool,

        /// Plies before a game is adjudicated a draw
        #[arg(long, default_value_t = 400)]
        max_plies: u32,

        /// Seed for random engines
        #[arg(long)]
        seed: Option<u64>,

        /// Optional: write the summary JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the engine's move for a position
    Bestmove {
        /// Position to search (defaults to the start position)
        #[arg(long)]
        fen: Option<String>,

        #[arg(long, default_value = "alphabeta")]
        engine: EngineSpec,

        #[arg(long, short = 'd', default_value_t = 4)]
        depth: u8,

        /// Seconds to think
        #[arg(long)]
        move_time: Option<f64>,
    },
}

fn move_time(secs: Option<f64>) -> Result<Option<Duration>> {
    secs.map(|s| Duration::try_from_secs_f64(s).with_context(|| format!("invalid move time {s}")))
        .transpose()
}

/// Limits for one engine: its own move time if given, else the shared one.
fn side_config(depth: u8, own: Option<f64>, shared: Option<f64>) -> Result<SideConfig> {
    Ok(SideConfig::new(depth, move_time(own.or(shared))?))
}

fn load_config(path: Option<&PathBuf>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading search config from {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Match {
            white,
            black,
            games,
            white_depth,
            black_depth,
            move_time: secs,
            white_move_time,
            black_move_time,
            alternate_colors,
            max_plies,
            seed,
            output,
        } => {
            let first_limits = side_config(white_depth, white_move_time, secs)?;
            let second_limits = side_config(black_depth, black_move_time, secs)?;
            let mut first = white.build(&config, seed);
            let mut second = black.build(&config, seed.map(|s| s.wrapping_add(1)));

            info!(%white, %black, games, ?first_limits, ?second_limits, "starting match");

            let runner = MatchRunner::new(MatchConfig {
                num_games: games,
                first: first_limits,
                second: second_limits,
                max_plies,
                alternate_colors,
            });
            let summary = runner.run_match(first.as_mut(), second.as_mut());

            println!();
            print!("{}", summary.report());

            if let Some(path) = output {
                summary
                    .save(&path)
                    .with_context(|| format!("saving results to {}", path.display()))?;
                info!(path = %path.display(), "results saved");
            }
        }
        Command::Bestmove {
            fen,
            engine,
            depth,
            move_time: secs,
        } => {
            let pos = match fen {
                Some(fen) => ChessBoard::from_fen(&fen)?,
                None => ChessBoard::startpos(),
            };
            let limits = match move_time(secs)? {
                Some(time) => SearchLimits::depth_and_time(depth, time),
                None => SearchLimits::depth(depth),
            };

            let mut engine = engine.build(&config, None);
            let result = engine.search(&pos, limits);

            match result.best_move {
                Some(mv) => println!(
                    "bestmove {} (score {}, depth {}, nodes {}{})",
                    move_to_uci(&pos, mv),
                    result.score,
                    result.depth,
                    result.nodes,
                    if result.stopped { ", stopped" } else { "" }
                ),
                None => println!("bestmove (none)"),
            }
        }
    }

    Ok(())
}
