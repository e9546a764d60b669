//! Application state module

mod forms;
pub mod messages;
mod outcome;
pub mod validation;

pub use forms::*;
pub use outcome::SubmissionOutcome;
