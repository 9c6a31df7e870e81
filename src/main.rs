use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use clienthub::app::state::LogLevel;
use clienthub::app::{run, App};
use clienthub::catalog::loader::load_clients;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("clients.json"));

    // A missing or malformed catalog is not fatal: start empty and let the
    // operator reload or build a list from scratch.
    let (clients, load_error) = match load_clients(&path) {
        Ok(clients) => (clients, None),
        Err(e) => (Vec::new(), Some(format!("Load error: {e:#}"))),
    };

    let mut app = App::new(clients, path);
    if let Some(message) = load_error {
        app.set_status(message);
        app.log("Load failed".to_string(), LogLevel::Error);
    }

    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alt screen")?;

    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to init terminal")?;

    run(&mut app, &mut terminal)
}
