//! Submission transport module
//!
//! The contact form hands a finished submission to a transport and awaits the
//! result. `HttpTransport` posts it to a contact endpoint; `SimulatedTransport`
//! stands in when no endpoint is configured.

mod http;
mod simulated;
mod submission;
mod traits;

pub use http::HttpTransport;
pub use simulated::SimulatedTransport;
pub use submission::{ContactSubmission, SubmitReceipt, TransportError};
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;

use crate::config::{ContactConfig, TransportKind};
use anyhow::Result;
use std::sync::Arc;

/// Build the transport selected by the configuration
pub fn from_config(config: &ContactConfig) -> Result<Arc<dyn SubmissionTransport>> {
    match config.transport_kind() {
        TransportKind::Http => {
            let endpoint = config.endpoint().unwrap_or_default();
            tracing::info!(endpoint = %endpoint, "Using HTTP transport");
            Ok(Arc::new(HttpTransport::new(&endpoint, config.submit_timeout())?))
        }
        TransportKind::Simulated => {
            tracing::info!(
                delay_ms = config.simulated_delay().as_millis() as u64,
                "Using simulated transport"
            );
            Ok(Arc::new(SimulatedTransport::new(config.simulated_delay())))
        }
    }
}
