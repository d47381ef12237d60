//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the computer waits before playing
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Seed for the computer's moves (repeatable games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path (the terminal is reserved for the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
