//! Contact form controller module
//!
//! The controller owns the form record, its error map and the submission
//! lifecycle. Field widgets, the live region and the transport are injected.

mod capabilities;
mod contact_form;

pub use capabilities::{FocusTarget, LiveRegion, StatusLine, HISTORY_LIMIT};
pub use contact_form::{deliver, ContactFormController, ControllerSettings, PendingSubmission};

#[cfg(test)]
pub use capabilities::{MockFocusTarget, MockLiveRegion};
