//! Form field value objects

use serde::{Deserialize, Serialize};

/// Identifier of a contact form field
///
/// The string key is used both as the state key and the error-map key, so it
/// must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Department,
    Subject,
    Message,
    PrivacyPolicyAccepted,
}

impl FieldId {
    /// All fields in declared order (also the focus order after a failed submit)
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Department,
        FieldId::Subject,
        FieldId::Message,
        FieldId::PrivacyPolicyAccepted,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::PrivacyPolicyAccepted => "privacyPolicyAccepted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::PrivacyPolicyAccepted => "Privacy Policy",
        }
    }

    /// Position in declared order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Department => 2,
            Self::Subject => 3,
            Self::Message => 4,
            Self::PrivacyPolicyAccepted => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The kind of value this field accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Department => FieldKind::Select,
            Self::PrivacyPolicyAccepted => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Widget kind backing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
}

/// Department a message is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    General,
    Membership,
    Programs,
    Events,
    Partnerships,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::General,
        Department::Membership,
        Department::Programs,
        Department::Events,
        Department::Partnerships,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Membership => "Membership",
            Self::Programs => "Programs",
            Self::Events => "Events",
            Self::Partnerships => "Partnerships",
        }
    }

    /// Step forward through the options; an unset select starts at the first one
    pub fn next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(d) => {
                let idx = Self::ALL.iter().position(|x| *x == d).unwrap_or(0);
                Some(Self::ALL[(idx + 1) % Self::ALL.len()])
            }
        }
    }

    /// Step backward through the options; an unset select starts at the last one
    pub fn prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[Self::ALL.len() - 1]),
            Some(d) => {
                let idx = Self::ALL.iter().position(|x| *x == d).unwrap_or(0);
                if idx == 0 {
                    Some(Self::ALL[Self::ALL.len() - 1])
                } else {
                    Some(Self::ALL[idx - 1])
                }
            }
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Department(Option<Department>),
    Checked(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Department(_) => FieldKind::Select,
            FieldValue::Checked(_) => FieldKind::Checkbox,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Department(None) => "Select a department".to_string(),
            FieldValue::Department(Some(d)) => d.label().to_string(),
            FieldValue::Checked(true) => "[x] I agree to the privacy policy".to_string(),
            FieldValue::Checked(false) => "[ ] I agree to the privacy policy".to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Department> for FieldValue {
    fn from(value: Department) -> Self {
        FieldValue::Department(Some(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;

        #[test]
        fn test_declared_order() {
            let keys: Vec<_> = FieldId::ALL.iter().map(|f| f.key()).collect();
            assert_eq!(
                keys,
                vec![
                    "name",
                    "email",
                    "department",
                    "subject",
                    "message",
                    "privacyPolicyAccepted"
                ]
            );
        }

        #[test]
        fn test_index_matches_declared_order() {
            for (i, field) in FieldId::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
                assert_eq!(FieldId::from_index(i), Some(*field));
            }
            assert!(FieldId::from_index(6).is_none());
        }

        #[test]
        fn test_kinds() {
            assert_eq!(FieldId::Name.kind(), FieldKind::Text);
            assert_eq!(FieldId::Department.kind(), FieldKind::Select);
            assert_eq!(FieldId::PrivacyPolicyAccepted.kind(), FieldKind::Checkbox);
            assert!(FieldId::Message.is_multiline());
            assert!(!FieldId::Subject.is_multiline());
        }
    }

    mod department {
        use super::*;

        #[test]
        fn test_next_from_unset_starts_at_general() {
            assert_eq!(Department::next(None), Some(Department::General));
        }

        #[test]
        fn test_next_wraps() {
            assert_eq!(
                Department::next(Some(Department::Partnerships)),
                Some(Department::General)
            );
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(
                Department::prev(Some(Department::General)),
                Some(Department::Partnerships)
            );
            assert_eq!(Department::prev(None), Some(Department::Partnerships));
        }

        #[test]
        fn test_serializes_lowercase() {
            let json = serde_json::to_string(&Department::Membership).unwrap();
            assert_eq!(json, "\"membership\"");
        }
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_display_value() {
            assert_eq!(FieldValue::from("abc").display_value(), "abc");
            assert_eq!(
                FieldValue::Department(None).display_value(),
                "Select a department"
            );
            assert_eq!(
                FieldValue::from(Department::General).display_value(),
                "General Inquiry"
            );
            assert!(FieldValue::from(true).display_value().starts_with("[x]"));
        }

        #[test]
        fn test_kind() {
            assert_eq!(FieldValue::from("x").kind(), FieldKind::Text);
            assert_eq!(FieldValue::from(false).kind(), FieldKind::Checkbox);
            assert_eq!(FieldValue::Department(None).kind(), FieldKind::Select);
        }
    }
}
