//! Dialog components for TUI

mod base;
mod outcome_dialog;

pub use outcome_dialog::render_outcome_dialog;
