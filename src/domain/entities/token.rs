//! Bearer token value object.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use thiserror::Error;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Failure to read the claims carried in a token payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenDecodeError {
    /// No second dot-separated segment.
    #[error("token has no payload segment")]
    MissingPayload,

    /// Payload segment does not decode as base64.
    #[error("payload is not valid base64: {0}")]
    InvalidBase64(String),

    /// Decoded payload is not JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// Decoded payload is JSON but not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Opaque bearer credential issued by the password service.
///
/// The value is never validated; the server is the only authority on its
/// shape. Formatting always masks it.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    /// Wraps a token string as received.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes token and returns inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() <= 10 {
            return "*".repeat(chars.len());
        }

        let visible_prefix: String = chars[..4].iter().collect();
        let visible_suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{visible_prefix}...{visible_suffix}")
    }

    /// Decodes the second dot-delimited segment as a JSON object.
    ///
    /// # Errors
    /// Returns error if the segment is missing, not base64, or not a JSON object.
    pub fn claims(&self) -> Result<Map<String, Value>, TokenDecodeError> {
        let payload = self
            .value
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or(TokenDecodeError::MissingPayload)?;

        let bytes = URL_SAFE_LENIENT
            .decode(payload)
            .or_else(|_| STANDARD_LENIENT.decode(payload))
            .map_err(|e| TokenDecodeError::InvalidBase64(e.to_string()))?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(claims)) => Ok(claims),
            Ok(_) => Err(TokenDecodeError::NotAnObject),
            Err(e) => Err(TokenDecodeError::InvalidJson(e.to_string())),
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Builds an unsigned JWT-shaped token around the given payload JSON.
    pub fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.c2lnbmF0dXJl")
    }
}
