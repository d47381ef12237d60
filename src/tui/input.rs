//! Keyboard and mouse mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::{GameMode, Position};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Move the mode menu highlight up.
    MenuUp,
    /// Move the mode menu highlight down.
    MenuDown,
    /// Pick the highlighted mode.
    MenuConfirm,
    /// Pick a mode directly.
    ChooseMode(GameMode),
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a specific cell.
    PlaceAt(Position),
    /// Reset the board.
    Reset,
    /// Return to mode selection.
    ReturnHome,
}

/// Maps a key on the mode selection screen.
pub fn menu_command(key: KeyEvent) -> Option<Command> {
    if is_interrupt(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MenuDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::MenuConfirm),
        KeyCode::Char('1') => Some(Command::ChooseMode(GameMode::SinglePlayer)),
        KeyCode::Char('2') => Some(Command::ChooseMode(GameMode::Multiplayer)),
        _ => None,
    }
}

/// Maps a key on the game screen.
pub fn game_command(key: KeyEvent) -> Option<Command> {
    if is_interrupt(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::Cursor(code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::ReturnHome),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlaceAt),
        _ => None,
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            game_command(key(KeyCode::Char('1'))),
            Some(Command::PlaceAt(Position::TopLeft))
        );
        assert_eq!(
            game_command(key(KeyCode::Char('9'))),
            Some(Command::PlaceAt(Position::BottomRight))
        );
        assert_eq!(game_command(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(menu_command(ctrl_c), Some(Command::Quit));
        assert_eq!(game_command(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_menu_shortcuts() {
        assert_eq!(
            menu_command(key(KeyCode::Char('1'))),
            Some(Command::ChooseMode(GameMode::SinglePlayer))
        );
        assert_eq!(
            menu_command(key(KeyCode::Char('2'))),
            Some(Command::ChooseMode(GameMode::Multiplayer))
        );
        assert_eq!(menu_command(key(KeyCode::Enter)), Some(Command::MenuConfirm));
    }
}
