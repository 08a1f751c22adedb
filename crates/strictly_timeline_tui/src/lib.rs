//! Terminal frontend for Strictly Timeline.
//!
//! The frontend is a thin presentation layer: it renders
//! [`strictly_timeline::ViewModel`] and forwards key presses to the engine as
//! intents. It never mutates game state itself.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` if set, else the configured filter.
fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Sends logs to stderr. Used by commands that do not take over the screen.
pub fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .try_init();
}

/// Sends logs to the configured file so they never draw over the UI.
pub fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the interactive terminal UI until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting Strictly Timeline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config.display_order());
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for a key, hand it to the app; repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
