//! Login use case implementation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::{AuthToken, LoginRequest, SessionIdentity};
use crate::domain::errors::{ApiError, StorageError};
use crate::domain::ports::{PasswordApiPort, TokenStoragePort};

/// Login failure.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The service rejected or never answered the login.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Token was issued but could not be stored.
    #[error("failed to store session: {0}")]
    Storage(#[from] StorageError),
}

/// Exchanges credentials for a token and persists it.
#[derive(Clone)]
pub struct LoginUseCase {
    api: Arc<dyn PasswordApiPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PasswordApiPort>, storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { api, storage_port }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the server rejects the credentials or the token
    /// cannot be persisted.
    pub async fn execute(&self, request: &LoginRequest) -> Result<AuthToken, LoginError> {
        debug!(username = %request.username, "Attempting login");

        let response = self.api.login(request).await.map_err(|e| {
            warn!(error = %e, "Login request failed");
            e
        })?;
        let token = AuthToken::new(response.token);

        self.storage_port.store_token(&token).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist session token");
            e
        })?;

        let identity = SessionIdentity::from_token(Some(&token));
        info!(
            user = identity.display_name(),
            token = %token,
            "Successfully authenticated"
        );

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LoginResponse;
    use crate::domain::ports::mocks::{ApiCall, MockPasswordApi, MockTokenStorage};

    #[tokio::test]
    async fn test_successful_login_persists_token() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_logged_in(Ok(LoginResponse {
            token: "a.b.c".to_string(),
        }));
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = LoginUseCase::new(api.clone(), storage.clone());

        let token = use_case
            .execute(&LoginRequest::new("alice", "pw1"))
            .await
            .unwrap();

        assert_eq!(token.as_str(), "a.b.c");
        assert_eq!(storage.get_token().await.unwrap(), Some(token));
        assert_eq!(api.calls(), vec![ApiCall::Login("alice".to_string())]);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_previous_token() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_logged_in(Err(ApiError::application(
            401,
            Some("Invalid credentials".to_string()),
        )));
        let previous = AuthToken::new("old.token.value");
        let storage = Arc::new(MockTokenStorage::with_token(previous.clone()));
        let use_case = LoginUseCase::new(api, storage.clone());

        let result = use_case.execute(&LoginRequest::new("alice", "bad")).await;

        assert!(matches!(result, Err(LoginError::Api(ApiError::Application { status: 401, .. }))));
        assert_eq!(storage.get_token().await.unwrap(), Some(previous));
    }

    #[tokio::test]
    async fn test_storage_failure_reported() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        storage.fail_writes();
        let use_case = LoginUseCase::new(api, storage);

        let result = use_case.execute(&LoginRequest::new("alice", "pw1")).await;

        assert!(matches!(result, Err(LoginError::Storage(_))));
    }
}
