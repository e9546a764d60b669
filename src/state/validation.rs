//! Per-field validation rules
//!
//! Every field is checked independently; there is no early exit, so a single
//! pass reports every invalid field at once.

use super::forms::{ErrorMap, FieldId, FormState};
use super::messages;

/// Minimum trimmed message length, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Validate the whole form and return every failing field
pub fn validate(form: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldId::ALL {
        if let Some(message) = validate_field(form, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate a single field against the current form
pub fn validate_field(form: &FormState, field: FieldId) -> Option<&'static str> {
    match field {
        FieldId::Name => required(&form.name, messages::NAME_REQUIRED),
        FieldId::Email => required(&form.email, messages::EMAIL_REQUIRED).or_else(|| {
            (!is_valid_email(form.email.trim())).then_some(messages::EMAIL_INVALID)
        }),
        FieldId::Department => form
            .department
            .is_none()
            .then_some(messages::DEPARTMENT_REQUIRED),
        FieldId::Subject => required(&form.subject, messages::SUBJECT_REQUIRED),
        FieldId::Message => required(&form.message, messages::MESSAGE_REQUIRED).or_else(|| {
            (form.message.trim().chars().count() < MIN_MESSAGE_CHARS)
                .then_some(messages::MESSAGE_TOO_SHORT)
        }),
        FieldId::PrivacyPolicyAccepted => (!form.privacy_policy_accepted)
            .then_some(messages::PRIVACY_REQUIRED),
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

/// Simple `local@domain.tld` shape check
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// at least one `.` that has characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
