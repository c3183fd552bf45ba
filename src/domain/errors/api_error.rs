//! Remote API error types.

use thiserror::Error;

/// Failure of a call to the password service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// Request never produced an HTTP response.
    #[error("{message}")]
    Transport { message: String },

    /// Server answered with a non-success status or an error body.
    #[error("{}", application_message(*status, message.as_deref()))]
    Application { status: u16, message: Option<String> },

    /// Success body did not match the expected shape.
    #[error("invalid response from server: {message}")]
    Decode { message: String },

    /// Client could not be built.
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

fn application_message(status: u16, message: Option<&str>) -> String {
    message.map_or_else(
        || format!("server responded with status {status}"),
        ToString::to_string,
    )
}

impl ApiError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates application error from status and optional `error` body field.
    #[must_use]
    pub fn application(status: u16, message: Option<String>) -> Self {
        Self::Application { status, message }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns the server supplied `error` text, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Application { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns HTTP status for application errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the server answered with a non-success status.
    #[must_use]
    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_uses_server_message() {
        let error = ApiError::application(409, Some("User already exists".to_string()));
        assert_eq!(error.to_string(), "User already exists");
        assert_eq!(error.server_message(), Some("User already exists"));
        assert_eq!(error.status(), Some(409));
    }

    #[test]
    fn test_application_error_falls_back_to_status() {
        let error = ApiError::application(500, None);
        assert_eq!(error.to_string(), "server responded with status 500");
        assert!(error.server_message().is_none());
    }

    #[test]
    fn test_transport_classification() {
        let error = ApiError::transport("request timed out");
        assert!(error.is_transport());
        assert!(!error.is_application());
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "request timed out");
    }
}
