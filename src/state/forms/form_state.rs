//! Form state, error map and field-level errors

use super::field::{Department, FieldId, FieldKind, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised when writing into the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{field}` expects a {expected:?} value, got {actual:?}")]
    ValueKind {
        field: &'static str,
        expected: FieldKind,
        actual: FieldKind,
    },
}

/// Current value of every field in the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub department: Option<Department>,
    pub subject: String,
    pub message: String,
    pub privacy_policy_accepted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Name => FieldValue::Text(self.name.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Department => FieldValue::Department(self.department),
            FieldId::Subject => FieldValue::Text(self.subject.clone()),
            FieldId::Message => FieldValue::Text(self.message.clone()),
            FieldId::PrivacyPolicyAccepted => FieldValue::Checked(self.privacy_policy_accepted),
        }
    }

    /// Write a value into a field; rejects values of the wrong kind
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (FieldId::Department, FieldValue::Department(d)) => self.department = d,
            (FieldId::PrivacyPolicyAccepted, FieldValue::Checked(c)) => {
                self.privacy_policy_accepted = c
            }
            (FieldId::Department | FieldId::PrivacyPolicyAccepted, value)
            | (_, value @ (FieldValue::Department(_) | FieldValue::Checked(_))) => {
                return Err(FormError::ValueKind {
                    field: field.key(),
                    expected: field.kind(),
                    actual: value.kind(),
                });
            }
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
        }
        Ok(())
    }

    /// Mutable access to a text field (None for select/checkbox fields)
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Subject => Some(&mut self.subject),
            FieldId::Message => Some(&mut self.message),
            FieldId::Department | FieldId::PrivacyPolicyAccepted => None,
        }
    }

    /// Returns true if every field holds its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Mapping from field to its current validation error
///
/// Iteration follows declared field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldId, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.entries.remove(&field)
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// First errored field in declared order
    pub fn first_field(&self) -> Option<FieldId> {
        self.entries.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
