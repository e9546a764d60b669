//! Wire envelope and transport results

use crate::state::FormState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// A form snapshot as handed to the transport
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Unique per attempt; sent as the idempotency key
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub form: FormState,
}

impl ContactSubmission {
    pub fn new(form: FormState) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }
}

/// Acknowledgement returned by a transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    /// Optional message from the backend (logged, never shown)
    #[serde(default)]
    pub message: Option<String>,
}

/// Transport-level failures
///
/// All variants map to the same failed outcome; the distinction only shows up
/// in logs.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },

    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    #[error("submission task ended before completing")]
    Cancelled,
}
