//! Headless Lines runner (default binary).
//!
//! Plays complete games with the greedy move chooser and prints one summary
//! per game. Useful for soak testing the rules and for comparing seeds.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};

use lines_game::core::{GameConfig, GameState, GameStats};
use lines_game::engine::{apply_move, choose_move, settle};
use lines_game::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

/// Ticks allowed for one removal animation (chains included) before giving up
const SETTLE_LIMIT: u32 = 10_000;

#[derive(Debug, Parser)]
#[command(name = "lines-game", about = "Play Lines games headlessly")]
struct Args {
    /// Seed of the first game; game N uses seed + N
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Stop a game after this many moves
    #[arg(long, default_value_t = 1000)]
    max_moves: u32,

    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u8,

    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u8,

    /// Print one JSON object per game instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    seed: u32,
    score: u32,
    game_over: bool,
    stats: GameStats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    for i in 0..args.games {
        let config = GameConfig {
            width: args.width,
            height: args.height,
            seed: args.seed.wrapping_add(i),
            ..GameConfig::default()
        };
        let summary = play(config, args.max_moves)?;

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "seed {:>10}  score {:>6}  moves {:>5}  removed {:>5}  chain {:>2}  {}",
                summary.seed,
                summary.score,
                summary.stats.moves,
                summary.stats.pieces_removed,
                summary.stats.longest_chain,
                if summary.game_over { "over" } else { "stopped" },
            );
        }
    }

    Ok(())
}

fn play(config: GameConfig, max_moves: u32) -> Result<GameSummary> {
    let seed = config.seed;
    let mut state = GameState::new(config).context("invalid game configuration")?;
    info!(seed, "game started");

    while !state.game_over() && state.stats().moves < max_moves {
        let Some((from, to)) = choose_move(&state) else {
            warn!(seed, "no legal move on a live board");
            break;
        };
        match apply_move(&mut state, from, to) {
            Ok(report) => debug!(?report, score = state.score(), "move applied"),
            Err(err) => {
                warn!(seed, code = err.code(), %err, "chosen move rejected");
                break;
            }
        }
        settle(&mut state, TICK_MS, SETTLE_LIMIT);
    }

    info!(
        seed,
        score = state.score(),
        moves = state.stats().moves,
        game_over = state.game_over(),
        "game finished"
    );

    Ok(GameSummary {
        seed,
        score: state.score(),
        game_over: state.game_over(),
        stats: *state.stats(),
    })
}
