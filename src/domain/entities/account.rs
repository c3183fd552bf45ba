//! Account registration and login shapes.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Body of `POST /register`.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct RegisterRequest {
    /// Requested account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl RegisterRequest {
    /// Creates new registration request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Server confirmation text.
    pub message: String,
}

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for protected calls.
    pub token: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let json = serde_json::to_value(LoginRequest::new("alice", "pw1")).unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice", "password": "pw1"}));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let login = LoginRequest::new("alice", "pw1");
        let register = RegisterRequest::new("bob", "s3cret");
        let response = LoginResponse {
            token: "abc.def.ghi".to_string(),
        };

        assert!(format!("{login:?}").contains("alice"));
        assert!(!format!("{login:?}").contains("pw1"));
        assert!(!format!("{register:?}").contains("s3cret"));
        assert!(!format!("{response:?}").contains("abc.def.ghi"));
    }
}
