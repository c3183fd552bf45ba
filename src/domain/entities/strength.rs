//! Password strength check shapes.

use serde::{Deserialize, Serialize};

/// Body of `POST /password-strength`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrengthRequest {
    /// Password to assess.
    pub password: String,
}

impl std::fmt::Debug for PasswordStrengthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordStrengthRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server assessment of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthResponse {
    /// Score from 0 (weakest) to 4.
    pub score: i32,
    /// Main weakness, empty when none.
    #[serde(default)]
    pub warning: String,
    /// Ways to improve the password.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Estimated offline cracking time.
    #[serde(
        rename = "crackTimeOfflineSlowHashingDisplay",
        alias = "crackTimeDisplay",
        default
    )]
    pub crack_time_display: String,
}

impl PasswordStrengthResponse {
    /// Renders the assessment as the four line summary shown to users.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Score: {}\nWarning: {}\nSuggestions: {}\nCrack Time: {}",
            self.score,
            self.warning,
            self.suggestions.join(", "),
            self.crack_time_display
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_server_field_names() {
        let json = r#"{
            "score": 1,
            "warning": "This is a top-10 common password.",
            "suggestions": ["Add another word or two.", "Avoid common phrases."],
            "crackTimeOfflineSlowHashingDisplay": "less than a second"
        }"#;
        let response: PasswordStrengthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.score, 1);
        assert_eq!(response.suggestions.len(), 2);
        assert_eq!(response.crack_time_display, "less than a second");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let response: PasswordStrengthResponse =
            serde_json::from_str(r#"{"score":4,"crackTimeDisplay":"centuries"}"#).unwrap();

        assert!(response.warning.is_empty());
        assert!(response.suggestions.is_empty());
        assert_eq!(response.crack_time_display, "centuries");
    }

    #[test]
    fn test_summary_lists_suggestions() {
        let response = PasswordStrengthResponse {
            score: 2,
            warning: "Short".to_string(),
            suggestions: vec!["Longer".to_string(), "Mix cases".to_string()],
            crack_time_display: "3 hours".to_string(),
        };

        assert_eq!(
            response.summary(),
            "Score: 2\nWarning: Short\nSuggestions: Longer, Mix cases\nCrack Time: 3 hours"
        );
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = PasswordStrengthRequest {
            password: "hunter2".to_string(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }
}
