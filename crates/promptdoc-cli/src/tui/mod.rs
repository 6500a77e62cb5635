//! Interactive form for building a prompt.
//!
//! Provides a terminal UI with:
//! - Tabs for the input form and the live prompt preview
//! - A section checklist for the current mode
//! - Key bindings for mode, constraints and saving

mod app;
mod components;
mod event;
mod ui;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use promptdoc_core::Config;

/// Run the TUI application and return the last rendered prompt.
pub async fn run(config: Config) -> Result<String, Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map(|()| app.prompt)
}
