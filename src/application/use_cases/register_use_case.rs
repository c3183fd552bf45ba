//! Account registration use case.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::entities::RegisterRequest;
use crate::domain::errors::ApiError;
use crate::domain::ports::PasswordApiPort;

/// Message the service answers with when an account was created.
pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// How a registration response is judged successful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RegisterSuccessPolicy {
    /// Only the exact [`REGISTERED_MESSAGE`] counts.
    #[default]
    ExactMessage,
    /// Any success status counts, whatever the message.
    AnySuccessStatus,
}

/// Result of a registration that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created.
    Registered,
    /// Success status but the message did not confirm creation.
    Unconfirmed {
        /// Message returned by the server.
        message: String,
    },
}

/// Creates accounts.
#[derive(Clone)]
pub struct RegisterUseCase {
    api: Arc<dyn PasswordApiPort>,
    policy: RegisterSuccessPolicy,
}

impl RegisterUseCase {
    /// Creates new register use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PasswordApiPort>, policy: RegisterSuccessPolicy) -> Self {
        Self { api, policy }
    }

    /// Executes registration.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects it.
    pub async fn execute(&self, request: &RegisterRequest) -> Result<RegisterOutcome, ApiError> {
        debug!(username = %request.username, policy = ?self.policy, "Attempting registration");

        let response = self.api.register(request).await.map_err(|e| {
            warn!(error = %e, "Registration request failed");
            e
        })?;

        let confirmed = match self.policy {
            RegisterSuccessPolicy::ExactMessage => response.message == REGISTERED_MESSAGE,
            RegisterSuccessPolicy::AnySuccessStatus => true,
        };

        if confirmed {
            info!(username = %request.username, "Account registered");
            Ok(RegisterOutcome::Registered)
        } else {
            warn!(server_message = %response.message, "Registration response did not confirm success");
            Ok(RegisterOutcome::Unconfirmed {
                message: response.message,
            })
        }
    }
}
