mod badge;
mod config;
mod error;
mod format;
mod logging;
mod shell;
mod sort;
mod task;
mod task_board;
mod task_store;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use task_board::TaskBoard;
use ui::App;

/// Puts the terminal back on every exit path, including early errors and panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to leave raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config).context("failed to set up logging")?;

    let board = TaskBoard::new().context("failed to load seed tasks")?;
    let mut app = App::new(board);

    // Terminal setup
    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(tasks = app.board.tasks().len(), "board opened");
    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    drop(guard);

    tracing::info!(tasks = app.board.tasks().len(), "board closed");
    result.context("terminal event loop failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_even_when_raw_mode_was_never_entered() {
        let guard = TerminalGuard;
        drop(guard);
        assert!(!crossterm::terminal::is_raw_mode_enabled().unwrap_or(false));
    }
}
