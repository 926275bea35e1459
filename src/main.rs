//! Tictactoe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe::{GameConfig, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Board output goes to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            debug!("No config file given, using defaults");
            GameConfig::default()
        }
    };

    match cli.command {
        Command::Play { json } => run_play(&config, format(json)),
        Command::Layout { json } => run_layout(&config, format(json)),
    }
}

fn format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

/// Play clicks from stdin until a blank line or EOF
fn run_play(config: &GameConfig, format: OutputFormat) -> Result<()> {
    let mut round = config.new_round()?;
    info!(order = round.board().order(), first = %round.to_move(), "Starting session");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    tictactoe::play(&mut round, stdin.lock(), &mut stdout, format)?;

    info!(games = round.score().games(), "Session ended");
    Ok(())
}

/// Print board geometry
fn run_layout(config: &GameConfig, format: OutputFormat) -> Result<()> {
    let board = config.build_board()?;
    let layout = tictactoe::layout(&board, *config.shape_margin());
    tictactoe::write_layout(&layout, &mut io::stdout().lock(), format)
}
