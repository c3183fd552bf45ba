//! Password service port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    AuthToken, LoginRequest, LoginResponse, PasswordRequest, PasswordResponse,
    PasswordStrengthRequest, PasswordStrengthResponse, RegisterRequest, RegisterResponse,
    SavePasswordResponse, SavedPassword,
};
use crate::domain::errors::ApiError;

/// Port for the remote password service.
#[async_trait]
pub trait PasswordApiPort: Send + Sync {
    /// Asks the server for a new password.
    async fn generate_password(
        &self,
        request: &PasswordRequest,
    ) -> Result<PasswordResponse, ApiError>;

    /// Asks the server to score a password.
    async fn check_password_strength(
        &self,
        request: &PasswordStrengthRequest,
    ) -> Result<PasswordStrengthResponse, ApiError>;

    /// Creates an account.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// Exchanges credentials for a bearer token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Lists the vault of the token owner.
    async fn saved_passwords(&self, token: &AuthToken) -> Result<Vec<SavedPassword>, ApiError>;

    /// Adds an entry to the vault.
    async fn save_password(
        &self,
        token: &AuthToken,
        entry: &SavedPassword,
    ) -> Result<SavePasswordResponse, ApiError>;

    /// Removes a vault entry by server id.
    async fn delete_password(
        &self,
        token: &AuthToken,
        id: &str,
    ) -> Result<SavePasswordResponse, ApiError>;
}
