//! Password generation screen.

use std::sync::Arc;

use tracing::debug;

use crate::application::use_cases::{VaultError, VaultUseCase};
use crate::application::validation::{self, ValidationError};
use crate::domain::entities::{CharacterClasses, SavedPassword};
use crate::domain::ports::PasswordApiPort;
use crate::presentation::lifecycle::{LifecycleHandle, ScreenLifecycle};
use crate::presentation::state::{Phase, Reducer, Store};

const DEFAULT_LENGTH: &str = "12";
const UNAUTHENTICATED_SAVE: &str = "You need to be logged in to save a password.";
const NOTHING_TO_SAVE: &str = "Generate a password before saving it.";

/// Generation screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePasswordState {
    /// Raw length text as typed.
    pub length: String,
    /// Selected character classes.
    pub classes: CharacterClasses,
    /// Generation progress.
    pub phase: Phase,
    /// Last generated password.
    pub password: Option<String>,
    /// Validation or failure text shown in place of a password.
    pub message: Option<String>,
    /// Whether the save dialog is open.
    pub show_save_dialog: bool,
    /// Save progress.
    pub save_phase: Phase,
    /// Save failure text.
    pub save_error: Option<String>,
    /// Whether the user must be sent to login before saving.
    pub show_unauth_dialog: bool,
}

impl GeneratePasswordState {
    /// Returns the text shown in the result area.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.password
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or_default()
    }
}

impl Default for GeneratePasswordState {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH.to_string(),
            classes: CharacterClasses::default(),
            phase: Phase::Idle,
            password: None,
            message: None,
            show_save_dialog: false,
            save_phase: Phase::Idle,
            save_error: None,
            show_unauth_dialog: false,
        }
    }
}

/// Events of the generation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratePasswordEvent {
    /// Length text edited.
    LengthChanged(String),
    /// Class toggles changed.
    ClassesChanged(CharacterClasses),
    /// Options failed local validation.
    Rejected(ValidationError),
    /// Generation request sent.
    Started,
    /// Server returned this password.
    Generated(String),
    /// Generation failed with this message.
    Failed(String),
    /// Save dialog opened.
    SaveDialogOpened,
    /// Save dialog closed.
    SaveDialogDismissed,
    /// Save attempted without a session.
    SaveUnauthenticated,
    /// Save request sent.
    SaveStarted,
    /// Entry stored in the vault.
    Saved,
    /// Save failed with this message.
    SaveFailed(String),
    /// Login prompt closed.
    UnauthDialogDismissed,
}

impl Reducer for GeneratePasswordState {
    type Event = GeneratePasswordEvent;

    fn reduce(&self, event: GeneratePasswordEvent) -> Self {
        let mut next = self.clone();
        match event {
            GeneratePasswordEvent::LengthChanged(length) => next.length = length,
            GeneratePasswordEvent::ClassesChanged(classes) => next.classes = classes,
            GeneratePasswordEvent::Rejected(reason) => {
                next.phase = Phase::Error;
                next.password = None;
                next.message = Some(reason.to_string());
            }
            GeneratePasswordEvent::Started => {
                next.phase = Phase::Loading;
                next.message = None;
            }
            GeneratePasswordEvent::Generated(password) => {
                next.phase = Phase::Success;
                next.password = Some(password);
                next.message = None;
            }
            GeneratePasswordEvent::Failed(message) => {
                next.phase = Phase::Error;
                next.password = None;
                next.message = Some(message);
            }
            GeneratePasswordEvent::SaveDialogOpened => {
                next.show_save_dialog = true;
                next.save_error = None;
            }
            GeneratePasswordEvent::SaveDialogDismissed => next.show_save_dialog = false,
            GeneratePasswordEvent::SaveUnauthenticated => {
                next.save_phase = Phase::Error;
                next.save_error = Some(UNAUTHENTICATED_SAVE.to_string());
                next.show_unauth_dialog = true;
            }
            GeneratePasswordEvent::SaveStarted => {
                next.save_phase = Phase::Loading;
                next.save_error = None;
            }
            GeneratePasswordEvent::Saved => {
                next.save_phase = Phase::Success;
                next.save_error = None;
                next.show_save_dialog = false;
            }
            GeneratePasswordEvent::SaveFailed(message) => {
                next.save_phase = Phase::Error;
                next.save_error = Some(message);
            }
            GeneratePasswordEvent::UnauthDialogDismissed => next.show_unauth_dialog = false,
        }
        next
    }
}

/// Orchestrates password generation and saving the result to the vault.
pub struct GeneratePasswordViewModel {
    store: Store<GeneratePasswordState>,
    api: Arc<dyn PasswordApiPort>,
    vault: VaultUseCase,
    lifecycle: ScreenLifecycle,
}

impl GeneratePasswordViewModel {
    /// Creates view-model with default inputs.
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(api: Arc<dyn PasswordApiPort>, vault: VaultUseCase) -> Self {
        Self {
            store: Store::default(),
            api,
            vault,
            lifecycle: ScreenLifecycle::new(),
        }
    }

    /// Returns current state.
    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GeneratePasswordState {
        self.store.snapshot()
    }

    /// Returns receiver observing state changes.
    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<GeneratePasswordState> {
        self.store.subscribe()
    }

    /// Returns handle that closes this screen.
    /// Returns a handle that closes this screen.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Updates the length text.
    pub fn set_length(&self, length: impl Into<String>) {
        self.store
            .dispatch(GeneratePasswordEvent::LengthChanged(length.into()));
    }

    /// Updates the class selection.
    pub fn set_classes(&self, classes: CharacterClasses) {
        self.store
            .dispatch(GeneratePasswordEvent::ClassesChanged(classes));
    }

    /// Validates input locally and asks the server for a password.
    pub async fn generate(&self) {
        let state = self.store.snapshot();
        if state.phase.is_loading() {
            debug!("Generation already in progress");
            return;
        }

        let request = match validation::password_request(&state.length, state.classes) {
            Ok(request) => request,
            Err(reason) => {
                debug!(%reason, "Generation input rejected");
                self.store.dispatch(GeneratePasswordEvent::Rejected(reason));
                return;
            }
        };

        self.store.dispatch(GeneratePasswordEvent::Started);
        let Some(result) = self
            .lifecycle
            .guard(self.api.generate_password(&request))
            .await
        else {
            return;
        };

        match result {
            Ok(response) => self
                .store
                .dispatch(GeneratePasswordEvent::Generated(response.password)),
            Err(e) => self.store.dispatch(GeneratePasswordEvent::Failed(format!(
                "Failed to generate password: {e}"
            ))),
        }
    }

    /// Opens the save dialog.
    pub fn open_save_dialog(&self) {
        self.store.dispatch(GeneratePasswordEvent::SaveDialogOpened);
    }

    /// Closes the save dialog.
    pub fn dismiss_save_dialog(&self) {
        self.store
            .dispatch(GeneratePasswordEvent::SaveDialogDismissed);
    }

    /// Closes the login prompt.
    pub fn dismiss_unauth_dialog(&self) {
        self.store
            .dispatch(GeneratePasswordEvent::UnauthDialogDismissed);
    }

    /// Saves the generated password to the vault. A blank username is sent
    /// as an empty string.
    pub async fn save(&self, title: &str, username: Option<String>) {
        let state = self.store.snapshot();
        if state.save_phase.is_loading() {
            debug!("Save already in progress");
            return;
        }
        let Some(password) = state.password else {
            self.store
                .dispatch(GeneratePasswordEvent::SaveFailed(NOTHING_TO_SAVE.to_string()));
            return;
        };

        let username = username.filter(|name| !name.trim().is_empty());
        let entry = SavedPassword::new(title, username, password);

        self.store.dispatch(GeneratePasswordEvent::SaveStarted);
        let Some(result) = self.lifecycle.guard(self.vault.save(&entry)).await else {
            return;
        };

        match result {
            Ok(response) => {
                debug!(server_message = %response.message, "Password saved");
                self.store.dispatch(GeneratePasswordEvent::Saved);
            }
            Err(VaultError::NotLoggedIn) => {
                self.store
                    .dispatch(GeneratePasswordEvent::SaveUnauthenticated);
            }
            Err(e) => self.store.dispatch(GeneratePasswordEvent::SaveFailed(format!(
                "Failed to save password: {e}"
            ))),
        }
    }
}
