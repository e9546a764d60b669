//! User-facing message text and error formatting helpers

use super::forms::{ErrorMap, FieldId};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const DEPARTMENT_REQUIRED: &str = "Please select a department";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const PRIVACY_REQUIRED: &str = "You must agree to the privacy policy";

/// Confirmation shown once the transport accepts the message
pub const SUCCESS_MESSAGE: &str = "Thank you for your message. We will get back to you shortly.";
/// Shown (and announced) when the transport fails
pub const FAILURE_MESSAGE: &str = "There was an error submitting your message. Please try again.";

/// Live region announcements
pub const ANNOUNCE_SUBMITTING: &str = "Submitting your message. Please wait...";
pub const ANNOUNCE_SUCCESS: &str = "Your message has been sent successfully.";
pub const ANNOUNCE_FAILURE: &str = FAILURE_MESSAGE;

/// Summary line for a failed validation pass (None when there is nothing to fix)
pub fn error_summary(errors: &ErrorMap) -> Option<String> {
    match errors.len() {
        0 => None,
        1 => Some("Please correct 1 error before submitting.".to_string()),
        n => Some(format!("Please correct {n} errors before submitting.")),
    }
}

/// Inline error text rendered under a field
pub fn field_error_line(field: FieldId, message: &str) -> String {
    format!("{}: {}", field.label(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_summary_empty() {
        assert!(error_summary(&ErrorMap::new()).is_none());
    }

    #[test]
    fn test_error_summary_singular() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldId::Name, NAME_REQUIRED);
        assert_eq!(
            error_summary(&errors).as_deref(),
            Some("Please correct 1 error before submitting.")
        );
    }

    #[test]
    fn test_error_summary_plural() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldId::Name, NAME_REQUIRED);
        errors.insert(FieldId::Email, EMAIL_REQUIRED);
        assert_eq!(
            error_summary(&errors).as_deref(),
            Some("Please correct 2 errors before submitting.")
        );
    }

    #[test]
    fn test_field_error_line() {
        assert_eq!(
            field_error_line(FieldId::PrivacyPolicyAccepted, PRIVACY_REQUIRED),
            "Privacy Policy: You must agree to the privacy policy"
        );
    }

    #[test]
    fn test_failure_announcement_matches_outcome_text() {
        assert_eq!(ANNOUNCE_FAILURE, FAILURE_MESSAGE);
    }
}
