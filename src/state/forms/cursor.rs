//! Keyboard focus across the form fields and the send button

use super::field::FieldId;
use crate::controller::FocusTarget;

/// Trait for common form navigation
pub trait Form {
    fn stop_count(&self) -> usize;
    fn active_stop(&self) -> usize;
    fn set_active_stop(&mut self, index: usize);
    fn next_stop(&mut self) {
        let count = self.stop_count();
        let current = self.active_stop();
        self.set_active_stop((current + 1) % count);
    }
    fn prev_stop(&mut self) {
        let count = self.stop_count();
        let current = self.active_stop();
        if current == 0 {
            self.set_active_stop(count - 1);
        } else {
            self.set_active_stop(current - 1);
        }
    }
}

/// Focus cursor for the contact form: one stop per field, then the send button
#[derive(Debug, Clone, Default)]
pub struct FormCursor {
    active_index: usize,
}

impl FormCursor {
    /// Index of the send button stop
    pub const SEND_BUTTON: usize = FieldId::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    /// Field under the cursor (None when the send button is focused)
    pub fn active_field(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_index)
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_index == Self::SEND_BUTTON
    }

    pub fn is_active(&self, field: FieldId) -> bool {
        self.active_index == field.index()
    }
}

impl Form for FormCursor {
    fn stop_count(&self) -> usize {
        Self::SEND_BUTTON + 1
    }
    fn active_stop(&self) -> usize {
        self.active_index
    }
    fn set_active_stop(&mut self, index: usize) {
        self.active_index = index.min(Self::SEND_BUTTON);
    }
}

impl FocusTarget for FormCursor {
    fn focus(&mut self, field: FieldId) {
        self.active_index = field.index();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_name() {
        let cursor = FormCursor::new();
        assert_eq!(cursor.active_field(), Some(FieldId::Name));
        assert!(!cursor.is_send_button_active());
    }

    #[test]
    fn test_stop_count_includes_send_button() {
        let cursor = FormCursor::new();
        assert_eq!(cursor.stop_count(), 7);
    }

    #[test]
    fn test_next_stop_cycles() {
        let mut cursor = FormCursor::new();
        for _ in 0..6 {
            cursor.next_stop();
        }
        assert!(cursor.is_send_button_active());
        assert_eq!(cursor.active_field(), None);
        cursor.next_stop();
        assert_eq!(cursor.active_field(), Some(FieldId::Name));
    }

    #[test]
    fn test_prev_stop_wraps_to_send_button() {
        let mut cursor = FormCursor::new();
        cursor.prev_stop();
        assert!(cursor.is_send_button_active());
    }

    #[test]
    fn test_set_active_stop_clamps() {
        let mut cursor = FormCursor::new();
        cursor.set_active_stop(100);
        assert_eq!(cursor.active_stop(), FormCursor::SEND_BUTTON);
    }

    #[test]
    fn test_focus_moves_to_field() {
        let mut cursor = FormCursor::new();
        cursor.set_active_stop(FormCursor::SEND_BUTTON);
        cursor.focus(FieldId::Subject);
        assert!(cursor.is_active(FieldId::Subject));
    }
}
