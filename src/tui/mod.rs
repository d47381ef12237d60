//! Terminal UI for tictactoe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, game_command, menu_command, move_cursor};
pub use ui::{GameLayout, MODE_OPTIONS, MenuLayout, draw, game_layout, menu_layout};

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tictactoe_core::GameController;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::config::GameConfig;
use crate::scheduler::AiScheduler;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the player quits. The terminal is restored on every exit path.
#[instrument(skip_all)]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tictactoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(terminal: &mut CrosstermTerminal, config: &GameConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut scheduler = AiScheduler::new(config.ai_delay(), event_tx);
    let mut app = App::new(GameController::new(*config.seed()), config.profile_url().clone());

    loop {
        let frame = terminal.draw(|f| ui::draw(f, &app))?;
        app.set_viewport(frame.area);

        // Deferred computer turns.
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Crossterm reports both press and release on some platforms.
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        scheduler.sync(app.pending_computer_turn());
        tokio::task::yield_now().await;
    }
}
