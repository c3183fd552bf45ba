//! Display identity derived from the stored session token.

use serde_json::Value;

use super::token::AuthToken;

const GUEST_NAME: &str = "Guest";
const UNKNOWN_USER_NAME: &str = "Unknown User";
const USERNAME_CLAIM: &str = "username";

/// Who the client believes is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionIdentity {
    /// No token stored.
    #[default]
    Guest,
    /// Token payload names the user.
    Named(String),
    /// Token payload decoded but carries no usable `username` claim.
    Anonymous,
    /// Token present but its payload could not be decoded.
    Malformed {
        /// Decode failure description.
        reason: String,
    },
}

impl SessionIdentity {
    /// Resolves identity from an optional stored token. Never fails.
    #[must_use]
    pub fn from_token(token: Option<&AuthToken>) -> Self {
        let Some(token) = token else {
            return Self::Guest;
        };

        match token.claims() {
            Ok(claims) => match claims.get(USERNAME_CLAIM) {
                Some(Value::String(name)) => Self::Named(name.clone()),
                Some(Value::Number(n)) => Self::Named(n.to_string()),
                Some(Value::Bool(b)) => Self::Named(b.to_string()),
                _ => Self::Anonymous,
            },
            Err(e) => Self::Malformed {
                reason: e.to_string(),
            },
        }
    }

    /// Returns the human readable name shown to the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Guest => GUEST_NAME,
            Self::Named(name) => name,
            Self::Anonymous | Self::Malformed { .. } => UNKNOWN_USER_NAME,
        }
    }

    /// Returns whether no session token exists.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    /// Returns whether a token exists but could not be read.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
