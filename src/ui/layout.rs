//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::SubmissionOutcome;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar with the live region text
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let indicator = match app.controller.outcome() {
        SubmissionOutcome::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionOutcome::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionOutcome::Succeeded(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionOutcome::Failed(_) => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };
    spans.push(indicator);

    match app.controller.live_region().current() {
        Some(announcement) => {
            let color = match app.controller.outcome() {
                SubmissionOutcome::Failed(_) => Color::Red,
                SubmissionOutcome::Succeeded(_) => Color::Green,
                _ => Color::Yellow,
            };
            spans.push(Span::styled(announcement, Style::default().fg(color)));
        }
        None => {
            spans.push(Span::styled(
                key_hints(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints shown while the live region is silent
fn key_hints() -> String {
    format!(
        "Tab:next  ←/→:department  Space:toggle  {}:send",
        crate::platform::SUBMIT_SHORTCUT
    )
}
