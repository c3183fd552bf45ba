use serde::Deserialize;

/// Error body returned by the password service.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Human readable failure description.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts the `error` text from a raw body, if it has one.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|body| body.error)
    }
}
