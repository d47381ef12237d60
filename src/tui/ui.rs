//! Stateless UI rendering.
//!
//! Layout is computed by [`menu_layout`] and [`game_layout`] so that mouse
//! hit-testing in the app uses exactly the rectangles that were drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, GameMode, Mark, Position};

use super::app::App;

/// Menu entries in display order.
pub const MODE_OPTIONS: [GameMode; 2] = [GameMode::SinglePlayer, GameMode::Multiplayer];

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 17;

/// Regions of the mode selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Game title.
    pub header: Rect,
    /// "PLEASE SELECT A MODE".
    pub title: Rect,
    /// One button per entry of [`MODE_OPTIONS`].
    pub options: [Rect; 2],
    /// Profile link and key help.
    pub footer: Rect,
}

/// Regions of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Game title.
    pub header: Rect,
    /// Status line.
    pub status: Rect,
    /// Board cells, indexed like the board.
    pub cells: [Rect; 9],
    /// "RESET GAME" button.
    pub reset: Rect,
    /// "RETURN HOME" button, drawn only when offered.
    pub return_home: Rect,
    /// Profile link and key help.
    pub footer: Rect,
}

/// Computes the mode selection layout for a terminal area.
pub fn menu_layout(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Options
            Constraint::Length(4), // Footer
        ])
        .split(area);

    let options_area = center_rect(chunks[2], BUTTON_WIDTH + 6, 7);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(options_area);

    MenuLayout {
        header: chunks[0],
        title: chunks[1],
        options: [rows[0], rows[2]],
        footer: chunks[3],
    }
}

/// Computes the game screen layout for a terminal area.
pub fn game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(3),            // Status
            Constraint::Min(CELL_HEIGHT * 3), // Board
            Constraint::Length(3),            // Buttons
            Constraint::Length(4),            // Footer
        ])
        .split(area);

    let board_area = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }

    let buttons_area = center_rect(chunks[3], BUTTON_WIDTH * 2 + 2, 3);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(buttons_area);

    GameLayout {
        header: chunks[0],
        status: chunks[1],
        cells,
        reset: buttons[0],
        return_home: buttons[2],
        footer: chunks[4],
    }
}

/// Renders whichever screen the current mode calls for.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.state().mode() {
        None => draw_menu(frame, app),
        Some(_) => draw_game(frame, app),
    }
}

fn draw_menu(frame: &mut Frame, app: &App) {
    let layout = menu_layout(frame.area());

    draw_header(frame, layout.header);

    let title = Paragraph::new("PLEASE SELECT A MODE")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    for (i, (mode, area)) in MODE_OPTIONS.iter().zip(layout.options).enumerate() {
        draw_button(frame, area, &mode.to_string(), i == app.menu_index());
    }

    draw_footer(
        frame,
        layout.footer,
        app.profile_url(),
        "↑↓: Navigate | Enter: Select | 1/2: Quick pick | q: Quit",
    );
}

fn draw_game(frame: &mut Frame, app: &App) {
    let layout = game_layout(frame.area());
    let state = app.state();

    draw_header(frame, layout.header);

    let status = Paragraph::new(state.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let winning = state.winning_pattern();
    for pos in Position::ALL {
        let highlighted = winning.is_some_and(|p| p.contains(pos));
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            state.board().get(pos),
            pos == app.cursor(),
            highlighted,
        );
    }

    draw_button(frame, layout.reset, "RESET GAME", false);
    if state.return_home_offered() {
        draw_button(frame, layout.return_home, "RETURN HOME", false);
    }

    let help = if state.return_home_offered() {
        "Arrows: Move | Enter/1-9: Place | r: Reset | h: Home | q: Quit"
    } else {
        "Arrows: Move | Enter/1-9: Place | r: Reset | q: Quit"
    };
    draw_footer(frame, layout.footer, app.profile_url(), help);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("TIC TAC TOE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, is_cursor: bool, is_winning: bool) {
    let mut style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if is_winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if is_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.symbol(), style)))
        .alignment(Alignment::Center)
        .style(if is_winning { style } else { Style::default() })
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, selected: bool) {
    let style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, profile_url: &str, help: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "← Back to Projects",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(profile_url.to_string(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
