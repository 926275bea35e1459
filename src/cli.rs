//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe - linked-cell board driven by typed clicks
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe by feeding click coordinates on stdin", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read `X Y` click lines from stdin and play them
    Play {
        /// Emit one JSON object per click instead of drawings
        #[arg(long)]
        json: bool,
    },

    /// Print the cell geometry and grid lines of the configured board
    Layout {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
