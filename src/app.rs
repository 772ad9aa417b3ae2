//! Application state and core logic

use crate::api::{ProfileApiTrait, ProfileClient, SubmitError};
use crate::config::{TuiConfig, ADDRESS_ENV};
use crate::state::{AppState, Form, FormKind, SubmitAttempt, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Completed submission reported back to the UI loop
#[derive(Debug)]
pub struct SubmissionResult {
    pub id: Uuid,
    pub kind: FormKind,
    pub outcome: Result<(), SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Profile service used for fetching defaults and submitting forms
    api: Arc<dyn ProfileApiTrait>,
    submissions_tx: mpsc::UnboundedSender<SubmissionResult>,
    submissions_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    config: TuiConfig,
    /// Where `config` is persisted; `None` keeps it in memory only
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App talking to the configured profile service
    pub async fn new(config: TuiConfig) -> Result<Self> {
        let address = config.resolve_address(std::env::var(ADDRESS_ENV).ok());
        let client = ProfileClient::new(&address, config.request_timeout())?;
        tracing::info!("Using profile service at {}", client.address());

        let mut app = Self::with_api(Arc::new(client), config).await;
        app.config_path = TuiConfig::config_path();
        Ok(app)
    }

    /// Create an App over any profile service implementation.
    ///
    /// The profile form is mounted with the fetched profile. When the fetch
    /// fails, the config's `default_profile` (or empty values) is used and
    /// the error is queued.
    pub async fn with_api(api: Arc<dyn ProfileApiTrait>, config: TuiConfig) -> Self {
        let (submissions_tx, submissions_rx) = mpsc::unbounded_channel();

        let (profile, load_error) = match api.get_profile().await {
            Ok(profile) => (profile, None),
            Err(err) => {
                tracing::warn!("Failed to load profile: {err}");
                (config.default_profile.clone().unwrap_or_default(), Some(err))
            }
        };

        let mut state = AppState::new(&profile);
        if let Some(err) = load_error {
            state.push_error(format!("Failed to load profile: {err}"));
        }

        Self {
            state,
            api,
            submissions_tx,
            submissions_rx,
            config,
            config_path: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::F(1) => self.state.current_view = View::Profile,
            KeyCode::F(2) => self.state.current_view = View::Password,
            KeyCode::F(5) => self.reload_profile().await,
            KeyCode::Enter => self.submit_active_form(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_active_form();
            }
            KeyCode::Tab | KeyCode::Down => self.state.active_form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.active_form_mut().prev_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.active_form_mut().input_char(c);
            }
            KeyCode::Backspace => self.state.active_form_mut().backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Re-fetch the profile and push it as the form's defaults
    async fn reload_profile(&mut self) {
        match self.api.get_profile().await {
            Ok(profile) => {
                self.state.profile_form.apply_defaults(&profile);
                self.status_message = Some("Profile reloaded".to_string());
            }
            Err(err) => self.push_error(format!("Failed to load profile: {err}")),
        }
    }

    /// Validate the visible form and, if valid, hand its payload to the service
    pub fn submit_active_form(&mut self) {
        let kind = self.state.current_view.form_kind();
        match kind {
            FormKind::Profile => match self.state.profile_form.submit() {
                SubmitAttempt::Ready(payload) => {
                    let api = Arc::clone(&self.api);
                    self.spawn_submission(kind, async move { api.update_profile(payload).await });
                }
                SubmitAttempt::Invalid(errors) => {
                    tracing::debug!("Profile form has {} invalid field(s)", errors.len());
                }
                SubmitAttempt::InFlight => tracing::debug!("Profile submission already in flight"),
            },
            FormKind::Password => match self.state.password_form.submit() {
                SubmitAttempt::Ready(payload) => {
                    let api = Arc::clone(&self.api);
                    self.spawn_submission(kind, async move { api.update_password(payload).await });
                }
                SubmitAttempt::Invalid(errors) => {
                    tracing::debug!("Password form has {} invalid field(s)", errors.len());
                }
                SubmitAttempt::InFlight => {
                    tracing::debug!("Password submission already in flight")
                }
            },
        }
    }

    fn spawn_submission<F>(&self, kind: FormKind, request: F)
    where
        F: Future<Output = Result<(), SubmitError>> + Send + 'static,
    {
        let id = Uuid::new_v4();
        let tx = self.submissions_tx.clone();
        tracing::info!(submission_id = %id, ?kind, "Submitting form");

        tokio::spawn(async move {
            let outcome = request.await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(SubmissionResult { id, kind, outcome });
        });
    }

    /// Apply every submission that has completed since the last tick
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.submissions_rx.try_recv() {
            self.apply_submission(result);
        }
    }

    /// Wait for the next submission to complete and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) -> bool {
        match self.submissions_rx.recv().await {
            Some(result) => {
                self.apply_submission(result);
                true
            }
            None => false,
        }
    }

    fn apply_submission(&mut self, result: SubmissionResult) {
        let SubmissionResult { id, kind, outcome } = result;

        match &outcome {
            Ok(()) => tracing::info!(submission_id = %id, ?kind, "Submission succeeded"),
            Err(err) => tracing::warn!(submission_id = %id, ?kind, "Submission failed: {err}"),
        }

        let succeeded = outcome.is_ok();
        match kind {
            FormKind::Profile => self.state.profile_form.finish_submit(outcome),
            FormKind::Password => self.state.password_form.finish_submit(outcome),
        }

        if succeeded && kind == FormKind::Profile {
            self.remember_profile();
        }

        if succeeded {
            let saved_at = match kind {
                FormKind::Profile => self.state.profile_form.controller.last_submitted_at(),
                FormKind::Password => self.state.password_form.controller.last_submitted_at(),
            };
            if let Some(at) = saved_at {
                self.status_message = Some(format!(
                    "Saved at {}",
                    at.with_timezone(&chrono::Local).format("%H:%M:%S")
                ));
            }
        }
    }

    /// Keep the last accepted profile as the offline fallback
    fn remember_profile(&mut self) {
        self.config.default_profile = Some(self.state.profile_form.saved_profile());
        if let Some(path) = &self.config_path {
            match self.config.save_to(path) {
                Ok(()) => tracing::debug!("Saved fallback profile to {}", path.display()),
                Err(err) => tracing::warn!("Failed to save config to {}: {err}", path.display()),
            }
        }
    }
}
