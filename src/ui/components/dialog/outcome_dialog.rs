//! Submission outcome banner

use super::base::{render_dialog, DialogConfig};
use crate::state::SubmissionOutcome;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the success or failure banner centered over the form
pub fn render_outcome_dialog(frame: &mut Frame, outcome: &SubmissionOutcome, message: &str) {
    let (title, color, hint) = match outcome {
        SubmissionOutcome::Failed(_) => (
            "Message not sent",
            Color::Red,
            vec![
                Span::raw("Press "),
                Span::styled(
                    crate::platform::SUBMIT_SHORTCUT,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to try again"),
            ],
        ),
        _ => (
            "Message sent",
            Color::Green,
            vec![Span::raw("The form will reset shortly")],
        ),
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
