//! Terminal widget driver.
//!
//! Renders the board as a 3x3 grid of cell widgets with a movable cursor.
//! Each cell is bound to its fixed position; once the game is over the
//! engine rejects further placements, so the grid is effectively disabled
//! until a new game starts.

mod app;
mod input;
mod score;
mod ui;

use super::GameDriver;
use anyhow::{Context, Result};
use app::{App, Signal};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// Terminal widget front-end over the rule engine.
pub struct TuiDriver {
    app: App,
}

impl TuiDriver {
    /// Creates the widget driver with a fresh engine.
    pub fn new() -> Self {
        Self { app: App::new() }
    }
}

impl Default for TuiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDriver for TuiDriver {
    fn run(&mut self) -> Result<()> {
        // Log to a file so output does not corrupt the alternate screen.
        let log_file =
            std::fs::File::create("tictactoe_tui.log").context("creating TUI log file")?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init();

        info!("Starting terminal widget driver");

        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = event_loop(&mut terminal, &mut self.app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(err) = &res {
            error!(error = ?err, "Widget loop error");
        }
        res
    }
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key.code) == Signal::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
