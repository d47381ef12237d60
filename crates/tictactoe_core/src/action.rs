//! First-class action types.
//!
//! Every change to a [`GameState`](crate::GameState) is one of these. An
//! action the rules do not allow is rejected with an [`ActionRejected`] that
//! says why; the game itself never shows that reason to the player.

use serde::{Deserialize, Serialize};

use crate::{GameMode, Mark, Position};

/// Input to the game reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Choose a session type from the mode selection screen.
    SelectMode(GameMode),
    /// A human placing the current mark.
    Place(Position),
    /// The computer placing O, scheduled under `generation`.
    ComputerMove {
        /// Generation the move was scheduled under.
        generation: u64,
        /// Where the computer plays.
        position: Position,
    },
    /// Clear the board, give X the move and offer "Return Home".
    Reset,
    /// Go back to mode selection.
    ReturnHome,
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ActionRejected {
    /// A mode is already in play.
    #[display("A mode is already selected")]
    ModeAlreadySelected,

    /// No mode has been chosen yet.
    #[display("No mode selected")]
    NoMode,

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// A winner exists or the board is full.
    #[display("Game is already over")]
    GameOver,

    /// In single-player mode the human only plays X.
    #[display("It's {}'s turn, not the human's", _0)]
    NotHumanTurn(Mark),

    /// The computer only moves for O in single-player mode.
    #[display("Not the computer's turn")]
    NotComputerTurn,

    /// The move was scheduled before a reset or return home.
    #[display("Computer move from generation {} is stale (now {})", scheduled, current)]
    StaleComputerMove {
        /// Generation the move carried.
        scheduled: u64,
        /// Generation of the current state.
        current: u64,
    },
}

impl std::error::Error for ActionRejected {}
