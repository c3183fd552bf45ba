//! Password strength screen.

use std::sync::Arc;

use tracing::debug;

use crate::application::validation;
use crate::domain::entities::PasswordStrengthResponse;
use crate::domain::ports::PasswordApiPort;
use crate::presentation::lifecycle::{LifecycleHandle, ScreenLifecycle};
use crate::presentation::state::{Phase, Reducer, Store};

/// Strength screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordStrengthState {
    /// Request progress.
    pub phase: Phase,
    /// Last assessment from the server.
    pub assessment: Option<PasswordStrengthResponse>,
    /// Validation or failure text.
    pub message: Option<String>,
}

impl PasswordStrengthState {
    /// Returns the summary or the failure text.
    #[must_use]
    pub fn result_text(&self) -> String {
        match (&self.assessment, &self.message) {
            (Some(assessment), _) => assessment.summary(),
            (None, Some(message)) => message.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Events of the strength screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordStrengthEvent {
    /// Input failed local validation.
    Rejected(String),
    /// Password was sent for checking.
    Started,
    /// Server returned an assessment.
    Assessed(PasswordStrengthResponse),
    /// Request failed with this message.
    Failed(String),
}

impl Reducer for PasswordStrengthState {
    type Event = PasswordStrengthEvent;

    fn reduce(&self, event: PasswordStrengthEvent) -> Self {
        match event {
            PasswordStrengthEvent::Rejected(message) | PasswordStrengthEvent::Failed(message) => {
                Self {
                    phase: Phase::Error,
                    assessment: None,
                    message: Some(message),
                }
            }
            PasswordStrengthEvent::Started => Self {
                phase: Phase::Loading,
                ..self.clone()
            },
            PasswordStrengthEvent::Assessed(assessment) => Self {
                phase: Phase::Success,
                assessment: Some(assessment),
                message: None,
            },
        }
    }
}

/// Sends a password to the server for scoring.
pub struct CheckPasswordStrengthViewModel {
    store: Store<PasswordStrengthState>,
    api: Arc<dyn PasswordApiPort>,
    lifecycle: ScreenLifecycle,
}

impl CheckPasswordStrengthViewModel {
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(api: Arc<dyn PasswordApiPort>) -> Self {
        Self {
            store: Store::default(),
            api,
            lifecycle: ScreenLifecycle::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PasswordStrengthState {
        self.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<PasswordStrengthState> {
        self.store.subscribe()
    }

    /// Returns a handle that closes this screen.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Checks `password`. An empty password is rejected locally.
    pub async fn check(&self, password: &str) {
        if self.store.snapshot().phase.is_loading() {
            debug!("Strength check already in progress");
            return;
        }

        let request = match validation::strength_request(password) {
            Ok(request) => request,
            Err(reason) => {
                self.store
                    .dispatch(PasswordStrengthEvent::Rejected(reason.to_string()));
                return;
            }
        };

        self.store.dispatch(PasswordStrengthEvent::Started);
        let Some(result) = self
            .lifecycle
            .guard(self.api.check_password_strength(&request))
            .await
        else {
            return;
        };

        match result {
            Ok(assessment) => {
                debug!(score = assessment.score, "Password assessed");
                self.store
                    .dispatch(PasswordStrengthEvent::Assessed(assessment));
            }
            Err(e) => self.store.dispatch(PasswordStrengthEvent::Failed(format!(
                "Failed to check password strength: {e}"
            ))),
        }
    }
}
