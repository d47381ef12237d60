//! Application state and logic.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tictactoe_core::{Action, AiTicket, GameController, GameState, Position};
use tracing::{debug, info, instrument};

use super::input::{self, Command};
use super::ui::{self, MODE_OPTIONS};
use crate::scheduler::AppEvent;

/// Main application state.
///
/// Everything the game shows lives in the controller's snapshot; the rest is
/// purely about where the player is pointing.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    menu_index: usize,
    cursor: Position,
    profile_url: String,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application on the mode selection screen.
    pub fn new(controller: GameController, profile_url: impl Into<String>) -> Self {
        Self {
            controller,
            menu_index: 0,
            cursor: Position::Center,
            profile_url: profile_url.into(),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// The current game snapshot.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Highlighted entry on the mode selection screen.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Footer link.
    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area of the last drawn frame for mouse hit-testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// The computer turn the game currently owes, if any.
    pub fn pending_computer_turn(&self) -> Option<AiTicket> {
        self.controller.pending_computer_turn()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let command = match self.state().mode() {
            None => input::menu_command(key),
            Some(_) => input::game_command(key),
        };
        if let Some(command) = command {
            self.execute(command);
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let point = ScreenPosition::new(mouse.column, mouse.row);

        let command = match self.state().mode() {
            None => {
                let layout = ui::menu_layout(self.viewport);
                layout
                    .options
                    .iter()
                    .position(|r| r.contains(point))
                    .map(|i| Command::ChooseMode(MODE_OPTIONS[i]))
            }
            Some(_) => {
                let layout = ui::game_layout(self.viewport);
                if let Some(i) = layout.cells.iter().position(|r| r.contains(point)) {
                    Position::from_index(i).map(Command::PlaceAt)
                } else if layout.reset.contains(point) {
                    Some(Command::Reset)
                } else if layout.return_home.contains(point)
                    && self.state().return_home_offered()
                {
                    Some(Command::ReturnHome)
                } else {
                    None
                }
            }
        };

        debug!(?point, ?command, "Mouse click");
        if let Some(command) = command {
            self.execute(command);
        }
    }

    /// Handles a message from a background task.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerTurnDue(ticket) => {
                self.controller.fire_computer_turn(ticket);
            }
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::MenuUp => {
                self.menu_index = (self.menu_index + MODE_OPTIONS.len() - 1) % MODE_OPTIONS.len();
            }
            Command::MenuDown => {
                self.menu_index = (self.menu_index + 1) % MODE_OPTIONS.len();
            }
            Command::MenuConfirm => self.choose_mode(self.menu_index),
            Command::ChooseMode(mode) => {
                if let Some(i) = MODE_OPTIONS.iter().position(|m| *m == mode) {
                    self.choose_mode(i);
                }
            }
            Command::Cursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Command::PlaceAtCursor => self.controller.dispatch(Action::Place(self.cursor)),
            Command::PlaceAt(position) => {
                self.cursor = position;
                self.controller.dispatch(Action::Place(position));
            }
            Command::Reset => self.controller.dispatch(Action::Reset),
            Command::ReturnHome => {
                if self.state().return_home_offered() {
                    self.controller.dispatch(Action::ReturnHome);
                }
            }
        }
    }

    fn choose_mode(&mut self, index: usize) {
        self.menu_index = index;
        self.cursor = Position::Center;
        self.controller.dispatch(Action::SelectMode(MODE_OPTIONS[index]));
    }
}
