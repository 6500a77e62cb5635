//! Generated prompt preview.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::tui::app::App;

/// Render the prompt exactly as it will be saved.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let stats = app.stats();

    let block = Block::default()
        .title(" Generated Prompt ")
        .title_bottom(format!(
            " {} characters · {} sections ",
            stats.characters, stats.sections
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let preview = Paragraph::new(app.prompt.as_str())
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0));

    frame.render_widget(preview, area);
}
