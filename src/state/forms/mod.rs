//! Form domain layer
//!
//! Type-safe field identifiers and values, the form record, the error map
//! and the focus cursor used by the terminal widgets.

mod cursor;
mod field;
mod form_state;

pub use cursor::{Form, FormCursor};
pub use field::{Department, FieldId, FieldKind, FieldValue};
pub use form_state::{ErrorMap, FormError, FormState};
