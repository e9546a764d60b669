//! Trait abstraction for the submission transport to enable mocking in tests

use super::submission::{ContactSubmission, SubmitReceipt, TransportError};
use async_trait::async_trait;

/// Delivers a contact submission to a backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver the submission; any error maps to a failed attempt
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, TransportError>;
}
