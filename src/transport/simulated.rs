//! Stand-in transport that waits a fixed delay and then succeeds

use super::submission::{ContactSubmission, SubmitReceipt, TransportError};
use super::traits::SubmissionTransport;
use async_trait::async_trait;
use std::time::Duration;

/// Transport used when no contact endpoint is configured
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, TransportError> {
        tracing::debug!(
            submission_id = %submission.submission_id,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::default())
    }
}
