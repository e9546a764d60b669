//! Contact form controller: field edits, validation and the submit lifecycle

use super::capabilities::{FocusTarget, LiveRegion};
use crate::config::ContactConfig;
use crate::state::messages;
use crate::state::validation;
use crate::state::{Department, ErrorMap, FieldId, FieldValue, FormError, FormState, SubmissionOutcome};
use crate::transport::{ContactSubmission, SubmissionTransport, SubmitReceipt, TransportError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Timing knobs for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Upper bound on a single transport call
    pub submit_timeout: Duration,
    /// How long a success stays visible before the form resets
    pub reset_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            submit_timeout: Duration::from_secs(15),
            reset_delay: Duration::from_secs(5),
        }
    }
}

impl From<&ContactConfig> for ControllerSettings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            submit_timeout: config.submit_timeout(),
            reset_delay: config.reset_delay(),
        }
    }
}

/// A validated submission waiting for its transport result
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub submission: ContactSubmission,
}

/// Run the transport with a timeout; an elapsed timeout becomes a transport error
pub async fn deliver(
    transport: Arc<dyn SubmissionTransport>,
    submission: ContactSubmission,
    timeout: Duration,
) -> Result<SubmitReceipt, TransportError> {
    match tokio::time::timeout(timeout, transport.submit(&submission)).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout(timeout)),
    }
}

/// Owns the contact form for the lifetime of one rendered form
pub struct ContactFormController<L: LiveRegion, F: FocusTarget> {
    form: FormState,
    errors: ErrorMap,
    outcome: SubmissionOutcome,
    transport: Arc<dyn SubmissionTransport>,
    live_region: L,
    focus: F,
    settings: ControllerSettings,
    /// Incremented per accepted attempt; stale results are dropped
    attempt: u64,
    reset_at: Option<Instant>,
    disposed: bool,
}

impl<L: LiveRegion, F: FocusTarget> ContactFormController<L, F> {
    pub fn new(
        transport: Arc<dyn SubmissionTransport>,
        live_region: L,
        focus: F,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            form: FormState::new(),
            errors: ErrorMap::new(),
            outcome: SubmissionOutcome::Idle,
            transport,
            live_region,
            focus,
            settings,
            attempt: 0,
            reset_at: None,
            disposed: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.outcome.is_submitting()
    }

    pub fn live_region(&self) -> &L {
        &self.live_region
    }

    pub fn live_region_mut(&mut self) -> &mut L {
        &mut self.live_region
    }

    pub fn focus_target(&self) -> &F {
        &self.focus
    }

    pub fn focus_target_mut(&mut self) -> &mut F {
        &mut self.focus
    }

    pub fn transport(&self) -> Arc<dyn SubmissionTransport> {
        Arc::clone(&self.transport)
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    /// When the pending post-success reset will fire
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Update a field and drop its stale error without re-validating
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        self.form.set(field, value)?;
        self.clear_error(field);
        Ok(())
    }

    /// Edit a text field in place; returns false for non-text fields
    pub fn edit_text(&mut self, field: FieldId, edit: impl FnOnce(&mut String)) -> bool {
        match self.form.text_mut(field) {
            Some(text) => {
                edit(text);
                self.clear_error(field);
                true
            }
            None => false,
        }
    }

    pub fn set_department(&mut self, department: Option<Department>) {
        self.form.department = department;
        self.clear_error(FieldId::Department);
    }

    pub fn set_privacy_accepted(&mut self, accepted: bool) {
        self.form.privacy_policy_accepted = accepted;
        self.clear_error(FieldId::PrivacyPolicyAccepted);
    }

    fn clear_error(&mut self, field: FieldId) {
        if self.errors.remove(field).is_some() {
            debug!(field = field.key(), "Cleared field error on edit");
        }
    }

    /// Recompute every field error from the current form
    pub fn validate(&self) -> ErrorMap {
        validation::validate(&self.form)
    }

    /// Validate and, if the form is clean, move into `Submitting`
    ///
    /// Returns `None` when a submission is in flight or its success is still
    /// shown, when the controller is disposed, or when validation failed.
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        if self.disposed {
            return None;
        }
        if !self.outcome.accepts_submit() {
            debug!(outcome = self.outcome.label(), "Ignoring submit");
            return None;
        }

        let errors = self.validate();
        if let Some(first) = errors.first_field() {
            debug!(
                error_count = errors.len(),
                first = first.key(),
                "Validation failed"
            );
            self.errors = errors;
            self.focus.focus(first);
            return None;
        }

        self.attempt += 1;
        self.errors.clear();
        self.reset_at = None;
        self.outcome = SubmissionOutcome::Submitting;
        self.live_region.announce(messages::ANNOUNCE_SUBMITTING);

        let submission = ContactSubmission::new(self.form.clone());
        info!(
            attempt = self.attempt,
            submission_id = %submission.submission_id,
            "Submitting contact form"
        );
        Some(PendingSubmission {
            attempt: self.attempt,
            submission,
        })
    }

    /// Apply a transport result to the attempt that produced it
    pub fn complete_submission(
        &mut self,
        attempt: u64,
        result: Result<SubmitReceipt, TransportError>,
    ) {
        if self.disposed || attempt != self.attempt || !self.outcome.is_submitting() {
            debug!(attempt, current = self.attempt, "Dropping stale submission result");
            return;
        }

        match result {
            Ok(receipt) => {
                info!(attempt, receipt = ?receipt.message, "Contact form submitted");
                self.outcome = SubmissionOutcome::Succeeded(messages::SUCCESS_MESSAGE.to_string());
                self.live_region.announce(messages::ANNOUNCE_SUCCESS);
                self.reset_at = Some(Instant::now() + self.settings.reset_delay);
            }
            Err(err) => {
                warn!(attempt, error = %err, "Contact form submission failed");
                self.outcome = SubmissionOutcome::Failed(messages::FAILURE_MESSAGE.to_string());
                self.live_region.announce(messages::ANNOUNCE_FAILURE);
            }
        }
    }

    /// Validate, deliver through the transport and settle the outcome
    pub async fn submit(&mut self) {
        let Some(pending) = self.begin_submission() else {
            return;
        };
        let result = deliver(
            self.transport(),
            pending.submission,
            self.settings.submit_timeout,
        )
        .await;
        self.complete_submission(pending.attempt, result);
    }

    /// Apply the post-success reset once its deadline has passed
    ///
    /// Returns true when the form was reset.
    pub fn tick(&mut self) -> bool {
        match self.reset_at {
            Some(deadline) if Instant::now() >= deadline => {
                self.reset_at = None;
                self.form = FormState::new();
                self.errors.clear();
                self.outcome = SubmissionOutcome::Idle;
                debug!("Form reset after successful submission");
                true
            }
            _ => false,
        }
    }

    /// Mark the form as unmounted; late results no longer touch state
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.reset_at = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
