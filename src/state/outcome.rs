//! Submission lifecycle

/// Lifecycle state of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether a new submit attempt may start; a shown success waits for the reset
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Banner text for a settled attempt
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) | Self::Failed(msg) => Some(msg),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
