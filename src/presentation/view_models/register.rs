//! Registration screen.

use tracing::debug;

use crate::application::use_cases::{RegisterOutcome, RegisterUseCase};
use crate::application::validation;
use crate::domain::errors::ApiError;
use crate::presentation::lifecycle::{LifecycleHandle, ScreenLifecycle};
use crate::presentation::state::{Phase, Reducer, Store};

/// Registration screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterState {
    /// Request progress.
    pub phase: Phase,
    /// Message shown under the form.
    pub error: Option<String>,
    /// Server message of a response that did not confirm the account.
    pub notice: Option<String>,
}

/// Events of the registration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    /// Credentials were sent.
    Started,
    /// Server confirmed the account.
    Registered,
    /// Server answered without confirming; carries its message.
    Unconfirmed(String),
    /// Validation or request failed with this message.
    Failed(String),
}

impl Reducer for RegisterState {
    type Event = RegisterEvent;

    fn reduce(&self, event: RegisterEvent) -> Self {
        match event {
            RegisterEvent::Started => Self {
                phase: Phase::Loading,
                error: None,
                notice: None,
            },
            RegisterEvent::Registered => Self {
                phase: Phase::Success,
                ..Self::default()
            },
            RegisterEvent::Unconfirmed(message) => Self {
                phase: Phase::Idle,
                error: None,
                notice: Some(message),
            },
            RegisterEvent::Failed(error) => Self {
                phase: Phase::Error,
                error: Some(error),
                notice: None,
            },
        }
    }
}

/// Creates an account. Success sends the user on to login.
pub struct RegisterViewModel {
    store: Store<RegisterState>,
    register: RegisterUseCase,
    lifecycle: ScreenLifecycle,
}

impl RegisterViewModel {
    /// Creates the view-model in its initial state.
    #[must_use]
    pub fn new(register: RegisterUseCase) -> Self {
        Self {
            store: Store::default(),
            register,
            lifecycle: ScreenLifecycle::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> RegisterState {
        self.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<RegisterState> {
        self.store.subscribe()
    }

    /// Returns a handle that closes this screen.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Creates an account; an unconfirmed answer only sets `notice`.
    pub async fn register(&self, username: &str, password: &str) {
        if self.store.snapshot().phase.is_loading() {
            debug!("Registration already in progress");
            return;
        }

        let request = match validation::register_request(username, password) {
            Ok(request) => request,
            Err(reason) => {
                self.store.dispatch(RegisterEvent::Failed(reason.to_string()));
                return;
            }
        };

        self.store.dispatch(RegisterEvent::Started);
        let Some(result) = self.lifecycle.guard(self.register.execute(&request)).await else {
            return;
        };

        let event = match result {
            Ok(RegisterOutcome::Registered) => RegisterEvent::Registered,
            Ok(RegisterOutcome::Unconfirmed { message }) => RegisterEvent::Unconfirmed(message),
            Err(ApiError::Application { status, message }) => RegisterEvent::Failed(
                message.unwrap_or_else(|| format!("Registration failed with code {status}")),
            ),
            Err(e) => RegisterEvent::Failed(format!("Registration failed: {e}")),
        };
        self.store.dispatch(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::RegisterSuccessPolicy;
    use crate::domain::entities::RegisterResponse;
    use crate::domain::ports::mocks::MockPasswordApi;
    use std::sync::Arc;
    use std::time::Duration;

    fn view_model(api: &Arc<MockPasswordApi>) -> RegisterViewModel {
        RegisterViewModel::new(RegisterUseCase::new(
            api.clone(),
            RegisterSuccessPolicy::ExactMessage,
        ))
    }

    #[tokio::test]
    async fn test_confirmed_registration() {
        let api = Arc::new(MockPasswordApi::new());
        let vm = view_model(&api);

        vm.register("bob", "pw").await;

        assert_eq!(vm.state().phase, Phase::Success);
    }

    #[tokio::test]
    async fn test_unconfirmed_message_sets_notice() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_registered(Ok(RegisterResponse {
            message: "User created".to_string(),
        }));
        let vm = view_model(&api);

        vm.register("bob", "pw").await;

        let state = vm.state();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.notice.as_deref(), Some("User created"));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_rejection_messages() {
        let api = Arc::new(MockPasswordApi::new());
        let vm = view_model(&api);

        api.set_registered(Err(ApiError::application(
            409,
            Some("Username already exists".to_string()),
        )));
        vm.register("bob", "pw").await;
        assert_eq!(vm.state().error.as_deref(), Some("Username already exists"));

        api.set_registered(Err(ApiError::application(500, None)));
        vm.register("bob", "pw").await;
        assert_eq!(
            vm.state().error.as_deref(),
            Some("Registration failed with code 500")
        );

        api.set_registered(Err(ApiError::transport("request timed out")));
        vm.register("bob", "pw").await;
        assert_eq!(
            vm.state().error.as_deref(),
            Some("Registration failed: request timed out")
        );
    }

    #[tokio::test]
    async fn test_resubmission_ignored_while_loading() {
        let api = Arc::new(MockPasswordApi::new());
        api.stall();
        let vm = view_model(&api);
        let handle = vm.lifecycle();

        tokio::join!(vm.register("bob", "pw"), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            vm.register("bob", "pw").await;
            handle.close();
        });

        assert_eq!(api.call_count(), 1);
    }
}
