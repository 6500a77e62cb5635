//! Input form component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use promptdoc_core::constraints::{INCLUDE_COMMANDS_LABEL, INCLUDE_ENV_DETAILS_LABEL};

use crate::tui::app::{App, Field, InputMode};

/// Render the text fields and the constraint summary.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let fields = Field::for_mode(app.record.mode);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| match field {
            Field::Focus => Constraint::Length(3),
            Field::Files => Constraint::Min(5),
            _ => Constraint::Length(5),
        })
        .collect();
    constraints.push(Constraint::Length(5));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        render_field(app, *field, frame, *chunk);
    }

    if let Some(chunk) = chunks.last() {
        render_constraints(app, frame, *chunk);
    }
}

fn render_field(app: &App, field: Field, frame: &mut Frame, area: Rect) {
    let hovered = app.current_field() == Some(field);
    let editing = hovered && app.input_mode == InputMode::Editing;

    let border_color = if editing {
        Color::Yellow
    } else if hovered {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let value = field.value(&app.record);
    let (text, style) = if value.is_empty() && !editing {
        (field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    // Keep the tail of long pastes in view.
    let inner_height = area.height.saturating_sub(2);
    let line_count = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);
    let scroll = line_count.saturating_sub(inner_height);

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_constraints(app: &App, frame: &mut Frame, area: Rect) {
    let c = &app.record.constraints;
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let key = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(vec![
            Span::styled("[u] ", key),
            Span::raw(format!("Audience: {}   ", c.audience.label())),
            Span::styled("[t] ", key),
            Span::raw(format!("Tone: {}   ", c.tone.label())),
            Span::styled("[d] ", key),
            Span::raw(format!("Depth: {}", c.length.label())),
        ]),
        Line::from(vec![
            Span::styled("[c] ", key),
            Span::raw(format!("{} {}", check(c.include_commands), INCLUDE_COMMANDS_LABEL)),
        ]),
        Line::from(vec![
            Span::styled("[e] ", key),
            Span::raw(format!(
                "{} {}",
                check(c.include_env_details),
                INCLUDE_ENV_DETAILS_LABEL
            )),
        ]),
    ];

    let block = Block::default()
        .title(format!(" Constraints & Style · [m] {} ", app.record.mode.button_label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
