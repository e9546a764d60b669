//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{messages, FieldId};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form: error summary, six fields and the send button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let controller = &app.controller;
    let errors = controller.errors();
    let summary_height = if errors.is_empty() {
        0
    } else {
        errors.len() as u16 + 1
    };

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height), // Error summary
            Constraint::Length(3),              // Name
            Constraint::Length(3),              // Email
            Constraint::Length(3),              // Department
            Constraint::Length(3),              // Subject
            Constraint::Min(6),                 // Message
            Constraint::Length(3),              // Privacy policy
            Constraint::Length(BUTTON_HEIGHT),  // Send
        ])
        .margin(1)
        .split(area);

    if let Some(summary) = messages::error_summary(errors) {
        let mut lines = vec![Line::from(Span::styled(
            summary,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(errors.iter().map(|(field, message)| {
            Line::from(Span::styled(
                format!("  • {}", messages::field_error_line(field, message)),
                Style::default().fg(Color::Red),
            ))
        }));
        frame.render_widget(Paragraph::new(lines), chunks[0]);
    }

    let cursor = app.cursor();
    for field in FieldId::ALL {
        draw_field(
            frame,
            chunks[field.index() + 1],
            field,
            &controller.form().get(field),
            cursor.is_active(field),
            controller.error(field),
        );
    }

    let submitting = controller.is_submitting();
    let label = if submitting {
        "Sending..."
    } else {
        "Send Message"
    };
    let button_area = Rect {
        width: chunks[7].width.min(24),
        ..chunks[7]
    };
    render_button(
        frame,
        button_area,
        label,
        cursor.is_send_button_active(),
        controller.outcome().accepts_submit(),
    );
}
