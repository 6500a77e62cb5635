//! UI rendering for the TUI.

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::{App, InputMode, SelectedTab};
use super::components::{form, preview, sections, tabs};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: tabs, content, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    tabs::render(app, frame, chunks[0]);
    render_main_content(app, frame, chunks[1]);
    render_status_bar(app, frame, chunks[2]);
}

/// Render the main content area (form or preview, with the section list beside it).
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(68), // Form / preview
            Constraint::Percentage(32), // Sections
        ])
        .split(area);

    match app.selected_tab {
        SelectedTab::Inputs => form::render(app, frame, chunks[0]),
        SelectedTab::Preview => preview::render(app, frame, chunks[0]),
    }

    sections::render(app, frame, chunks[1]);
}

/// Render the status bar.
fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let keys = match app.input_mode {
        InputMode::Normal => {
            "[i] Edit  [Space] Section  [a] All  [m] Mode  [u/t/d] Style  [c/e] Toggles  [s] Save  [Tab] Switch  [q] Quit"
        }
        InputMode::Editing => "[Enter] Newline / Done  [Esc] Done",
    };

    let status = match &app.status_message {
        Some(message) => format!("{}  |  {}", keys, message.text),
        None => keys.to_string(),
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
