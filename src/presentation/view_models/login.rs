//! Login screen.

use std::sync::Arc;

use tracing::debug;

use crate::application::use_cases::{LoginError, LoginUseCase};
use crate::application::validation;
use crate::domain::entities::SessionIdentity;
use crate::domain::errors::ApiError;
use crate::presentation::lifecycle::{LifecycleHandle, ScreenLifecycle};
use crate::presentation::state::{Phase, Reducer, Store};

/// Login screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Request progress.
    pub phase: Phase,
    /// Message shown under the form.
    pub error: Option<String>,
    /// Who is signed in after a successful login.
    pub identity: SessionIdentity,
}

impl LoginState {
    /// Returns whether the user may leave the login screen.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self.phase, Phase::Success)
    }
}

/// Events of the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// Credentials were sent.
    Started,
    /// Token stored for this identity.
    Succeeded(SessionIdentity),
    /// Validation or request failed with this message.
    Failed(String),
}

impl Reducer for LoginState {
    type Event = LoginEvent;

    fn reduce(&self, event: LoginEvent) -> Self {
        match event {
            LoginEvent::Started => Self {
                phase: Phase::Loading,
                error: None,
                identity: self.identity.clone(),
            },
            LoginEvent::Succeeded(identity) => Self {
                phase: Phase::Success,
                error: None,
                identity,
            },
            LoginEvent::Failed(error) => Self {
                phase: Phase::Error,
                error: Some(error),
                identity: self.identity.clone(),
            },
        }
    }
}

/// Authenticates and persists the session token.
pub struct LoginViewModel {
    store: Store<LoginState>,
    login: LoginUseCase,
    lifecycle: ScreenLifecycle,
}

impl LoginViewModel {
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(login: LoginUseCase) -> Self {
        Self {
            store: Store::default(),
            login,
            lifecycle: ScreenLifecycle::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<LoginState> {
        self.store.subscribe()
    }

    /// Returns a handle that closes this screen.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Logs in with the given credentials.
    pub async fn login(&self, username: &str, password: &str) {
        if self.store.snapshot().phase.is_loading() {
            debug!("Login already in progress");
            return;
        }

        let request = match validation::login_request(username, password) {
            Ok(request) => request,
            Err(reason) => {
                self.store.dispatch(LoginEvent::Failed(reason.to_string()));
                return;
            }
        };

        self.store.dispatch(LoginEvent::Started);
        let Some(result) = self.lifecycle.guard(self.login.execute(&request)).await else {
            return;
        };

        match result {
            Ok(token) => {
                let identity = SessionIdentity::from_token(Some(&token));
                self.store.dispatch(LoginEvent::Succeeded(identity));
            }
            Err(e) => self.store.dispatch(LoginEvent::Failed(login_failure(&e))),
        }
    }
}

fn login_failure(error: &LoginError) -> String {
    match error {
        LoginError::Api(ApiError::Application { message, .. }) => message
            .clone()
            .unwrap_or_else(|| "Failed to login".to_string()),
        other => format!("An unexpected error occurred: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TokenStoragePort;
    use crate::domain::ports::mocks::{MockPasswordApi, MockTokenStorage};
    use test_case::test_case;

    fn view_model(api: &Arc<MockPasswordApi>, storage: &Arc<MockTokenStorage>) -> LoginViewModel {
        LoginViewModel::new(LoginUseCase::new(api.clone(), storage.clone()))
    }

    #[tokio::test]
    async fn test_success_stores_token_and_names_user() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        let vm = view_model(&api, &storage);

        vm.login("alice", "pw1").await;

        let state = vm.state();
        assert!(state.is_logged_in());
        assert_eq!(state.identity.display_name(), "alice");
        assert!(storage.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_subscribers_observe_outcome() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        let vm = view_model(&api, &storage);
        let mut rx = vm.subscribe();

        vm.login("alice", "pw1").await;

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_logged_in());
    }

    #[test_case(Some("Invalid credentials"), "Invalid credentials" ; "server_message")]
    #[test_case(None, "Failed to login" ; "no_message")]
    #[tokio::test]
    async fn test_rejection_message(message: Option<&str>, expected: &str) {
        let api = Arc::new(MockPasswordApi::new());
        api.set_logged_in(Err(ApiError::application(401, message.map(str::to_string))));
        let storage = Arc::new(MockTokenStorage::new());
        let vm = view_model(&api, &storage);

        vm.login("alice", "bad").await;

        let state = vm.state();
        assert_eq!(state.phase, Phase::Error);
        assert_eq!(state.error.as_deref(), Some(expected));
        assert!(!storage.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_transport_failure_is_unexpected() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_logged_in(Err(ApiError::transport("request timed out")));
        let storage = Arc::new(MockTokenStorage::new());
        let vm = view_model(&api, &storage);

        vm.login("alice", "pw1").await;

        assert_eq!(
            vm.state().error.as_deref(),
            Some("An unexpected error occurred: request timed out")
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_unexpected() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        storage.fail_writes();
        let vm = view_model(&api, &storage);

        vm.login("alice", "pw1").await;

        assert_eq!(
            vm.state().error.as_deref(),
            Some("An unexpected error occurred: failed to store session: failed to store token: mock failure")
        );
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_locally() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        let vm = view_model(&api, &storage);

        vm.login("", "pw1").await;

        assert_eq!(api.call_count(), 0);
        assert_eq!(vm.state().error.as_deref(), Some("Please fill in all fields"));
    }
}
