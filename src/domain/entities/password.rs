//! Password generation request and response shapes.

use serde::{Deserialize, Serialize};

/// Character classes a generated password may draw from.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    /// `A-Z`.
    pub uppercase: bool,
    /// `a-z`.
    pub lowercase: bool,
    /// `0-9`.
    pub numbers: bool,
    /// Punctuation and symbols.
    pub special: bool,
}

impl CharacterClasses {
    /// Returns whether at least one class is enabled.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.special
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}

/// Body of `POST /generate-password`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest {
    /// Requested length, at least 4.
    pub length: i32,
    /// Draw from `A-Z`.
    pub include_uppercase: bool,
    /// Draw from `a-z`.
    pub include_lowercase: bool,
    /// Draw from `0-9`.
    pub include_numbers: bool,
    /// Draw from symbols.
    pub include_special_characters: bool,
}

impl PasswordRequest {
    /// Creates request from a validated length and class selection.
    #[must_use]
    pub const fn new(length: i32, classes: CharacterClasses) -> Self {
        Self {
            length,
            include_uppercase: classes.uppercase,
            include_lowercase: classes.lowercase,
            include_numbers: classes.numbers,
            include_special_characters: classes.special,
        }
    }
}

/// Response of `POST /generate-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResponse {
    /// The generated password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_wire_names() {
        let classes = CharacterClasses {
            special: false,
            ..CharacterClasses::default()
        };
        let json = serde_json::to_value(PasswordRequest::new(16, classes)).unwrap();

        assert_eq!(json["length"], 16);
        assert_eq!(json["includeUppercase"], true);
        assert_eq!(json["includeLowercase"], true);
        assert_eq!(json["includeNumbers"], true);
        assert_eq!(json["includeSpecialCharacters"], false);
    }

    #[test]
    fn test_no_classes_selected() {
        let none = CharacterClasses {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        };
        assert!(!none.any());
        assert!(CharacterClasses::default().any());
    }
}
