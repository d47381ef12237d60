//! Immutable game snapshot and its reducer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{self, GameResult, WinningPattern};
use crate::{Action, ActionRejected, Board, Cell, GameMode, Mark, Position};

/// Complete game state.
///
/// Winner, draw and status are never stored here; they are derived from the
/// board on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// True when O is to move. Defaults to X first.
    o_to_move: bool,
    /// `None` while on the mode selection screen.
    mode: Option<GameMode>,
    /// Whether "Return Home" is offered.
    return_home_offered: bool,
    /// Bumped by every mode selection, reset and return home.
    generation: u64,
}

impl GameState {
    /// Creates the initial state: no mode, empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next.
    pub fn to_move(&self) -> Mark {
        if self.o_to_move { Mark::O } else { Mark::X }
    }

    /// Selected mode, `None` while unselected.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Whether the "Return Home" action is offered.
    pub fn return_home_offered(&self) -> bool {
        self.return_home_offered
    }

    /// Session/reset generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.result().winner()
    }

    /// Returns the line to highlight, if any.
    pub fn winning_pattern(&self) -> Option<WinningPattern> {
        self.result().pattern()
    }

    /// True when all nine cells hold a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// True when the computer owes a move: single-player, O to move, game not over.
    pub fn awaiting_computer(&self) -> bool {
        self.mode == Some(GameMode::SinglePlayer) && self.o_to_move && !self.result().is_over()
    }

    /// Status line shown above the board.
    ///
    /// A win beats a full board, which beats the turn indicator.
    pub fn status_message(&self) -> String {
        match self.result() {
            GameResult::Won { mark, .. } => format!("Player {} Wins!", mark),
            GameResult::Draw => "It's a draw!".to_string(),
            GameResult::InProgress => format!("Player {} Turn", self.to_move()),
        }
    }

    /// Computes the state after `action`, or why the action is not allowed.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn transition(&self, action: &Action) -> Result<Self, ActionRejected> {
        match *action {
            Action::SelectMode(mode) => {
                if self.mode.is_some() {
                    return Err(ActionRejected::ModeAlreadySelected);
                }
                Ok(Self {
                    board: Board::new(),
                    o_to_move: false,
                    mode: Some(mode),
                    return_home_offered: false,
                    generation: self.generation + 1,
                })
            }
            Action::Place(position) => {
                let mode = self.mode.ok_or(ActionRejected::NoMode)?;
                self.check_playable(position)?;
                if mode == GameMode::SinglePlayer && self.o_to_move {
                    return Err(ActionRejected::NotHumanTurn(Mark::O));
                }
                Ok(self.with_mark(position, self.to_move()))
            }
            Action::ComputerMove {
                generation,
                position,
            } => {
                if generation != self.generation {
                    return Err(ActionRejected::StaleComputerMove {
                        scheduled: generation,
                        current: self.generation,
                    });
                }
                if self.mode != Some(GameMode::SinglePlayer) || !self.o_to_move {
                    return Err(ActionRejected::NotComputerTurn);
                }
                self.check_playable(position)?;
                Ok(self.with_mark(position, Mark::O))
            }
            Action::Reset => {
                if self.mode.is_none() {
                    return Err(ActionRejected::NoMode);
                }
                Ok(Self {
                    board: Board::new(),
                    o_to_move: false,
                    mode: self.mode,
                    return_home_offered: true,
                    generation: self.generation + 1,
                })
            }
            Action::ReturnHome => {
                if self.mode.is_none() {
                    return Err(ActionRejected::NoMode);
                }
                Ok(Self {
                    mode: None,
                    return_home_offered: false,
                    generation: self.generation + 1,
                    ..self.clone()
                })
            }
        }
    }

    /// Applies `action`. A rejected action returns the state unchanged.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply(self, action: Action) -> Self {
        match self.transition(&action) {
            Ok(next) => {
                info!(?action, status = %next.status_message(), "Action applied");
                next
            }
            Err(reason) => {
                debug!(?action, %reason, "Action ignored");
                self
            }
        }
    }

    fn check_playable(&self, position: Position) -> Result<(), ActionRejected> {
        if self.result().is_over() {
            return Err(ActionRejected::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(ActionRejected::CellOccupied(position));
        }
        Ok(())
    }

    fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut next = self.clone();
        next.board.set(position, Cell::Occupied(mark));
        next.o_to_move = mark.opponent() == Mark::O;
        next
    }
}
