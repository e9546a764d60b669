//! Field rendering utilities for forms

use crate::state::{FieldId, FieldKind, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its inline validation error
///
/// An errored field gets a red border and the message in its bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &FieldValue,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = value.display_value();
    let display_str = match field.kind() {
        FieldKind::Text if display_value.is_empty() && !is_active => "(empty)".to_string(),
        FieldKind::Select if is_active => format!("◀ {display_value} ▶"),
        _ => display_value,
    };

    let cursor = if is_active && field.kind() == FieldKind::Text {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        // `lines()` drops a trailing empty line, keep it so the cursor lands there
        if display_str.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines).style(style)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} * ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
