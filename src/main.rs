//! Rewind - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{Cli, Command, Config, GameSession, HistoryOrder, parse_moves, replay, report};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Play { descending } => run_play(apply_order_flag(config, descending)),
        Command::Replay {
            moves,
            jump,
            descending,
        } => run_replay(apply_order_flag(config, descending), &moves, jump),
    }
}

fn apply_order_flag(config: Config, descending: bool) -> Config {
    if descending {
        config.with_history_order(HistoryOrder::Descending)
    } else {
        config
    }
}

/// Run the interactive terminal game
fn run_play(config: Config) -> Result<()> {
    initialize_file_tracing(&config)?;
    info!(order = %config.history_order(), "Starting interactive game");

    rewind_games::tui::run_tui(GameSession::with_order(*config.history_order()))
}

/// Replay moves and print the report
#[instrument(skip(config, moves), fields(count = moves.len()))]
fn run_replay(config: Config, moves: &[String], jump: Option<usize>) -> Result<()> {
    initialize_stderr_tracing(&config);

    let positions = parse_moves(moves).context("Invalid move")?;
    let session = replay(&positions, jump, *config.history_order())
        .context("Cannot jump to the requested move")?;

    print!("{}", report(&session));
    Ok(())
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.fallback_filter()))
}

/// Logs go to a file so they do not corrupt the alternate screen.
fn initialize_file_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
