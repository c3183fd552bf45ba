//! Password service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorBody;
use crate::domain::entities::{
    AuthToken, LoginRequest, LoginResponse, PasswordRequest, PasswordResponse,
    PasswordStrengthRequest, PasswordStrengthResponse, RegisterRequest, RegisterResponse,
    SavePasswordResponse, SavedPassword,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::PasswordApiPort;

/// Hosted password service.
pub const DEFAULT_API_BASE: &str = "https://password-generator-backend-5d7264b5c7ed.herokuapp.com";
/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("passforge/", env!("CARGO_PKG_VERSION"));

/// Password service client over HTTP/JSON.
///
/// Stateless apart from the connection pool; protected calls take the
/// token explicitly.
pub struct HttpPasswordApi {
    client: Client,
    base_url: Url,
}

impl HttpPasswordApi {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::client(format!("invalid base URL {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::client(format!("invalid base URL {base_url}")));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(operation, "Sending request");

        let response = request.send().await.map_err(|e| {
            warn!(operation, error = %e, "Failed to reach password service");
            transport_error(&e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(operation, error = %e, "Failed to read response body");
            transport_error(&e)
        })?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&body);
            warn!(
                operation,
                status = status.as_u16(),
                server_message = message.as_deref().unwrap_or_default(),
                "Password service returned an error"
            );
            return Err(ApiError::application(status.as_u16(), message));
        }

        serde_json::from_slice::<T>(&body).map_err(|e| {
            if let Some(message) = ErrorBody::message_from(&body) {
                warn!(operation, server_message = %message, "Success status carried an error body");
                return ApiError::application(status.as_u16(), Some(message));
            }
            warn!(operation, error = %e, "Failed to parse response");
            ApiError::decode(e.to_string())
        })
    }
}

fn transport_error(error: &reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::transport("request timed out")
    } else if error.is_connect() {
        ApiError::transport(format!("failed to connect to password service: {error}"))
    } else {
        ApiError::transport(error.to_string())
    }
}

#[async_trait]
impl PasswordApiPort for HttpPasswordApi {
    async fn generate_password(
        &self,
        request: &PasswordRequest,
    ) -> Result<PasswordResponse, ApiError> {
        let url = self.endpoint(&["generate-password"]);
        self.send("generate_password", self.client.post(url).json(request))
            .await
    }

    async fn check_password_strength(
        &self,
        request: &PasswordStrengthRequest,
    ) -> Result<PasswordStrengthResponse, ApiError> {
        let url = self.endpoint(&["password-strength"]);
        self.send("check_password_strength", self.client.post(url).json(request))
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = self.endpoint(&["register"]);
        self.send("register", self.client.post(url).json(request))
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(&["login"]);
        self.send("login", self.client.post(url).json(request)).await
    }

    async fn saved_passwords(&self, token: &AuthToken) -> Result<Vec<SavedPassword>, ApiError> {
        let url = self.endpoint(&["saved-passwords"]);
        self.send(
            "saved_passwords",
            self.client.get(url).bearer_auth(token.as_str()),
        )
        .await
    }

    async fn save_password(
        &self,
        token: &AuthToken,
        entry: &SavedPassword,
    ) -> Result<SavePasswordResponse, ApiError> {
        let url = self.endpoint(&["save-password"]);
        self.send(
            "save_password",
            self.client.post(url).bearer_auth(token.as_str()).json(entry),
        )
        .await
    }

    async fn delete_password(
        &self,
        token: &AuthToken,
        id: &str,
    ) -> Result<SavePasswordResponse, ApiError> {
        let url = self.endpoint(&["delete-password", id]);
        self.send(
            "delete_password",
            self.client.delete(url).bearer_auth(token.as_str()),
        )
        .await
    }
}
