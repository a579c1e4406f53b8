//! Terminal UI for gridmark.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Cursor, digit_to_cursor, move_cursor};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridmark_core::GameController;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// File the TUI logs to, so log lines do not overwrite the screen.
pub const LOG_FILE: &str = "gridmark_tui.log";

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(dimension = game.dimension()))]
pub fn run_tui(game: GameController) -> Result<()> {
    info!("Starting gridmark TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(game));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let dimension = app.game().dimension();
                    let board = ui::board_rect(area, dimension);
                    if let Some(cell) = ui::cell_at(board, dimension, mouse.column, mouse.row) {
                        app.click(cell);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
