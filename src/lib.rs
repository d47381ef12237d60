//! Terminal tic-tac-toe.
//!
//! Game rules live in [`tictactoe_core`]; this crate adds configuration, the
//! delayed computer opponent and the terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Scheduler**: one deferred computer turn at a time, keyed by ticket
//! - **TUI**: mode selection and game screens rendered with ratatui
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! run_tui(GameConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod scheduler;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_PROFILE_URL, GameConfig};

// Crate-level exports - Scheduling
pub use scheduler::{AiScheduler, AppEvent};

// Crate-level exports - Terminal UI
pub use tui::{
    App, Command, GameLayout, MODE_OPTIONS, MenuLayout, draw, game_command, game_layout,
    menu_command, menu_layout, move_cursor, run_tui,
};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Action, ActionRejected, AiTicket, Board, Cell, GameController, GameMode, GameResult,
    GameState, Mark, Position, WinningPattern,
};
