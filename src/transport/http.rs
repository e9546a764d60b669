//! HTTP transport posting submissions to a contact endpoint
//!
//! The envelope is sent as JSON with an `Idempotency-Key` header carrying the
//! submission id. Any 2xx response is a success.

use super::submission::{ContactSubmission, SubmitReceipt, TransportError};
use super::traits::SubmissionTransport;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Default contact endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/contact";

/// Header carrying the submission id
const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Posts contact submissions over HTTP
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            endpoint
        };
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(anyhow!("Contact endpoint must be an http(s) URL: {endpoint}"));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
        debug!(endpoint = %endpoint, "HttpTransport initialized");
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, TransportError> {
        debug!(
            url = %self.endpoint,
            submission_id = %submission.submission_id,
            "Posting contact submission"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(IDEMPOTENCY_HEADER, submission.submission_id.to_string())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                submission_id = %submission.submission_id,
                status_code = %status,
                "Contact endpoint rejected submission"
            );
            return Err(TransportError::Rejected {
                status: status.as_u16(),
            });
        }

        // The body is optional; an empty or non-JSON body still counts as accepted
        let body = response.text().await?;
        let receipt = serde_json::from_str::<SubmitReceipt>(&body).unwrap_or_default();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_uses_default() {
        let transport = HttpTransport::new("", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_custom_endpoint() {
        let transport =
            HttpTransport::new("https://example.org/contact", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.endpoint(), "https://example.org/contact");
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        assert!(HttpTransport::new("ftp://example.org", Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let transport =
            HttpTransport::new("http://127.0.0.1:9/contact", Duration::from_secs(2)).unwrap();
        let submission = ContactSubmission::new(crate::state::FormState::new());
        let result = tokio_test::block_on(transport.submit(&submission));
        assert!(matches!(result, Err(TransportError::Http(_))));
    }
}
