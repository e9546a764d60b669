//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_area = layout::create_layout(area);

    forms::draw_contact_form(frame, main_area, app);

    // Settled outcomes are shown as a banner over the form
    if let Some(message) = app.controller.outcome().message() {
        components::render_outcome_dialog(frame, app.controller.outcome(), message);
    }

    // Status bar doubles as the live region
    layout::draw_status_bar(frame, app);
}
