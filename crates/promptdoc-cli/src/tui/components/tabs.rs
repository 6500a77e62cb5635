//! Tab bar component.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs as RataTabs},
};

use crate::tui::app::{App, SelectedTab};

/// Render the tab bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let titles = vec![SelectedTab::Inputs.title(), SelectedTab::Preview.title()];

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .title(format!(" PromptDoc · {} ", app.record.mode.title()))
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.selected_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}
