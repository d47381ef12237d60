//! Pure tic-tac-toe game logic.
//!
//! This crate has no terminal and no async code. Everything the UI shows is
//! derived from a [`GameState`] snapshot, and every change to that snapshot
//! goes through [`GameState::apply`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Mark`], [`Position`], [`GameMode`]
//! - **Rules**: win and draw evaluation producing a [`GameResult`]
//! - **Reducer**: [`GameState`] + [`Action`] → new [`GameState`]
//! - **Opponent**: uniform random move selection for the computer player
//! - **Controller**: [`GameController`] pairs the snapshot with an RNG and
//!   resolves deferred computer turns against the current state
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, GameMode, GameState, Position};
//!
//! let state = GameState::new()
//!     .apply(Action::SelectMode(GameMode::Multiplayer))
//!     .apply(Action::Place(Position::Center));
//! assert_eq!(state.status_message(), "Player O Turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod controller;
mod position;
mod rules;
mod state;
mod types;

pub use action::{Action, ActionRejected};
pub use ai::{AiTicket, choose_random_move};
pub use controller::GameController;
pub use position::Position;
pub use rules::{
    GameResult, WINNING_PATTERNS, Win, WinningPattern, check_winner, evaluate, is_draw, is_full,
};
pub use state::GameState;
pub use types::{Board, Cell, GameMode, Mark};
