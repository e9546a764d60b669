//! Application state and core logic

use crate::config::ContactConfig;
use crate::controller::{
    deliver, ContactFormController, ControllerSettings, FocusTarget, StatusLine,
};
use crate::state::{Department, FieldId, FieldKind, Form, FormCursor};
use crate::transport::{self, SubmissionTransport, SubmitReceipt, TransportError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Transport result tagged with the attempt that produced it
type AttemptResult = (u64, Result<SubmitReceipt, TransportError>);

/// The contact form controller wired to terminal widgets
pub type TerminalController = ContactFormController<StatusLine, FormCursor>;

/// Main application struct
pub struct App {
    /// Form controller; the cursor is its focus target, the status line its live region
    pub controller: TerminalController,
    /// Whether the app should quit
    quit: bool,
    /// Transport task for the attempt in flight
    in_flight: Option<JoinHandle<()>>,
    results_tx: mpsc::UnboundedSender<AttemptResult>,
    results_rx: mpsc::UnboundedReceiver<AttemptResult>,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let transport = transport::from_config(config)?;
        Ok(Self::with_transport(transport, ControllerSettings::from(config)))
    }

    /// Create an App around an explicit transport
    pub fn with_transport(
        transport: Arc<dyn SubmissionTransport>,
        settings: ControllerSettings,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            controller: ContactFormController::new(
                transport,
                StatusLine::new(),
                FormCursor::new(),
                settings,
            ),
            quit: false,
            in_flight: None,
            results_tx,
            results_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn cursor(&self) -> &FormCursor {
        self.controller.focus_target()
    }

    /// Validate and hand the form to the transport without blocking the UI
    pub fn start_submission(&mut self) {
        let Some(pending) = self.controller.begin_submission() else {
            return;
        };
        let transport = self.controller.transport();
        let timeout = self.controller.settings().submit_timeout;
        let tx = self.results_tx.clone();
        let attempt = pending.attempt;
        self.in_flight = Some(tokio::spawn(async move {
            let result = deliver(transport, pending.submission, timeout).await;
            // The receiver only goes away when the app is torn down
            let _ = tx.send((attempt, result));
        }));
    }

    /// Apply finished transport results and the post-success reset
    pub fn poll(&mut self) {
        while let Ok((attempt, result)) = self.results_rx.try_recv() {
            self.controller.complete_submission(attempt, result);
            self.in_flight = None;
        }
        if self.controller.tick() {
            self.controller.focus_target_mut().focus(FieldId::Name);
            self.controller.live_region_mut().clear();
        }
    }

    /// Abort any in-flight submission and unmount the form
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            tracing::debug!("Aborted in-flight submission");
        }
        self.controller.dispose();
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.shutdown(),
            KeyCode::Char('s') if ctrl => self.start_submission(),
            KeyCode::Tab => self.controller.focus_target_mut().next_stop(),
            KeyCode::BackTab => self.controller.focus_target_mut().prev_stop(),
            _ => match self.cursor().active_field() {
                Some(field) => self.handle_field_key(field, key),
                None => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.start_submission();
                    }
                }
            },
        }
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        match field.kind() {
            FieldKind::Text => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.controller.edit_text(field, |s| s.push(c));
                }
                KeyCode::Backspace => {
                    self.controller.edit_text(field, |s| {
                        s.pop();
                    });
                }
                KeyCode::Enter if field.is_multiline() => {
                    self.controller.edit_text(field, |s| s.push('\n'));
                }
                KeyCode::Enter | KeyCode::Down => self.controller.focus_target_mut().next_stop(),
                KeyCode::Up => self.controller.focus_target_mut().prev_stop(),
                _ => {}
            },
            FieldKind::Select => {
                let current = self.controller.form().department;
                match key.code {
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                        self.controller.set_department(Department::next(current))
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.controller.set_department(Department::prev(current))
                    }
                    KeyCode::Backspace => self.controller.set_department(None),
                    KeyCode::Enter | KeyCode::Down => {
                        self.controller.focus_target_mut().next_stop()
                    }
                    KeyCode::Up => self.controller.focus_target_mut().prev_stop(),
                    _ => {}
                }
            }
            FieldKind::Checkbox => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    let accepted = self.controller.form().privacy_policy_accepted;
                    self.controller.set_privacy_accepted(!accepted);
                }
                KeyCode::Down => self.controller.focus_target_mut().next_stop(),
                KeyCode::Up => self.controller.focus_target_mut().prev_stop(),
                _ => {}
            },
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
