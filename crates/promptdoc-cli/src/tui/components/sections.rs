//! Section checklist component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::tui::app::{App, FormRow};

/// Render the checklist of the current mode's sections.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let enabled = app.record.active_sections().len();
    let total = app.record.mode.catalog().len();

    let block = Block::default()
        .title(format!(" Sections {}/{} ", enabled, total))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let hovered = match app.current_row() {
        Some(FormRow::Section(section)) => Some(section.id),
        _ => None,
    };

    let items: Vec<ListItem> = app
        .record
        .mode
        .catalog()
        .iter()
        .map(|section| {
            let on = app.record.is_enabled(section.id);
            let (icon, icon_style) = if on {
                ("■", Style::default().fg(Color::Green))
            } else {
                ("□", Style::default().fg(Color::DarkGray))
            };

            let mut label_style = if on {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if hovered == Some(section.id) {
                label_style = label_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }

            let line = Line::from(vec![
                Span::styled(format!(" {} ", icon), icon_style),
                Span::styled(section.label, label_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner_area);
}
