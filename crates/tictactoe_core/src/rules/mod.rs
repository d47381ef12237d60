//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is cached:
//! callers recompute the result from the board every time they need it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_PATTERNS, Win, WinningPattern, check_winner};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark};

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line and at least one empty cell.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in enumeration order.
        pattern: WinningPattern,
    },
    /// Board full with no line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn pattern(&self) -> Option<WinningPattern> {
        match self {
            GameResult::Won { pattern, .. } => Some(*pattern),
            _ => None,
        }
    }

    /// True once the game accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Evaluates a board. A win takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(win) = check_winner(board) {
        return GameResult::Won {
            mark: win.mark,
            pattern: win.pattern,
        };
    }
    if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
