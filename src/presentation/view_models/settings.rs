//! Settings screen.

use tracing::warn;

use crate::application::use_cases::SessionUseCase;
use crate::domain::entities::SessionIdentity;
use crate::presentation::state::{Phase, Reducer, Store};

/// Settings screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    /// Progress of the last action.
    pub phase: Phase,
    /// Who the stored token belongs to.
    pub identity: SessionIdentity,
    /// Whether the logout confirmation is open.
    pub show_logout_dialog: bool,
    /// The token was deleted.
    pub logged_out: bool,
    /// Last failure text.
    pub error: Option<String>,
}

/// Events of the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// Stored token was read.
    IdentityResolved(SessionIdentity),
    /// Logout confirmation opened.
    LogoutDialogShown,
    /// Logout confirmation closed.
    LogoutDialogHidden,
    /// Token deleted.
    LoggedOut,
    /// Storage failed with this message.
    Failed(String),
}

impl Reducer for SettingsState {
    type Event = SettingsEvent;

    fn reduce(&self, event: SettingsEvent) -> Self {
        let mut next = self.clone();
        match event {
            SettingsEvent::IdentityResolved(identity) => {
                next.phase = Phase::Success;
                next.identity = identity;
            }
            SettingsEvent::LogoutDialogShown => next.show_logout_dialog = true,
            SettingsEvent::LogoutDialogHidden => next.show_logout_dialog = false,
            SettingsEvent::LoggedOut => {
                next.phase = Phase::Success;
                next.identity = SessionIdentity::Guest;
                next.show_logout_dialog = false;
                next.logged_out = true;
                next.error = None;
            }
            SettingsEvent::Failed(error) => {
                next.phase = Phase::Error;
                next.error = Some(error);
            }
        }
        next
    }
}

/// Shows who is signed in and ends the session.
pub struct SettingsViewModel {
    store: Store<SettingsState>,
    session: SessionUseCase,
}

impl SettingsViewModel {
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(session: SessionUseCase) -> Self {
        Self {
            store: Store::default(),
            session,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SettingsState {
        self.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<SettingsState> {
        self.store.subscribe()
    }

    /// Resolves the identity behind the stored token.
    pub async fn load(&self) {
        let event = match self.session.identity().await {
            Ok(identity) => SettingsEvent::IdentityResolved(identity),
            Err(e) => {
                warn!(error = %e, "Could not read session");
                SettingsEvent::Failed(e.to_string())
            }
        };
        self.store.dispatch(event);
    }

    /// Opens the logout confirmation.
    pub fn show_logout_dialog(&self) {
        self.store.dispatch(SettingsEvent::LogoutDialogShown);
    }

    /// Closes the logout confirmation.
    pub fn hide_logout_dialog(&self) {
        self.store.dispatch(SettingsEvent::LogoutDialogHidden);
    }

    /// Clears the stored token.
    pub async fn logout(&self) {
        let event = match self.session.logout().await {
            Ok(()) => SettingsEvent::LoggedOut,
            Err(e) => SettingsEvent::Failed(e.to_string()),
        };
        self.store.dispatch(event);
    }
}
