//! Capability handles injected into the controller

use crate::state::FieldId;

/// Status channel announced to assistive technology
#[cfg_attr(test, mockall::automock)]
pub trait LiveRegion {
    fn announce(&mut self, message: &str);
}

/// Moves keyboard focus to a field widget
#[cfg_attr(test, mockall::automock)]
pub trait FocusTarget {
    fn focus(&mut self, field: FieldId);
}

/// Announcements kept for the status line; older ones are dropped
pub const HISTORY_LIMIT: usize = 16;

/// Live region rendered as the status line of the terminal
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<String>,
    history: Vec<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Most recent announcements in order, at most `HISTORY_LIMIT`
    pub fn announcements(&self) -> &[String] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl LiveRegion for StatusLine {
    fn announce(&mut self, message: &str) {
        tracing::debug!(announcement = message, "Live region announcement");
        self.current = Some(message.to_string());
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_starts_blank() {
        let line = StatusLine::new();
        assert!(line.current().is_none());
        assert!(line.announcements().is_empty());
    }

    #[test]
    fn test_announce_replaces_current_and_keeps_history() {
        let mut line = StatusLine::new();
        line.announce("first");
        line.announce("second");
        assert_eq!(line.current(), Some("second"));
        assert_eq!(line.announcements(), ["first", "second"]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut line = StatusLine::new();
        for i in 0..HISTORY_LIMIT + 5 {
            line.announce(&format!("message {i}"));
        }
        assert_eq!(line.announcements().len(), HISTORY_LIMIT);
        assert_eq!(line.announcements()[0], "message 5");
        assert_eq!(
            line.current(),
            Some(format!("message {}", HISTORY_LIMIT + 4).as_str())
        );
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut line = StatusLine::new();
        line.announce("first");
        line.clear();
        assert!(line.current().is_none());
        assert_eq!(line.announcements().len(), 1);
    }
}
