//! Input checks performed before any request leaves the client.

use thiserror::Error;

use crate::domain::entities::{
    CharacterClasses, LoginRequest, PasswordRequest, PasswordStrengthRequest, RegisterRequest,
};

/// Shortest password the generator accepts.
pub const MIN_PASSWORD_LENGTH: i32 = 4;

/// Local validation failure. The display text is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Length is not a number of at least 4.
    #[error("Invalid password length. Must be at least 4.")]
    InvalidLength,

    /// Every character class is off.
    #[error("At least one character type must be selected.")]
    NoCharacterClass,

    /// Strength input is empty.
    #[error("Please enter a password")]
    EmptyPassword,

    /// Username or password is empty.
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Builds a generation request from the raw length text and class flags.
///
/// # Errors
/// Returns error if the length is not an integer of at least
/// [`MIN_PASSWORD_LENGTH`] or no class is selected.
pub fn password_request(
    length: &str,
    classes: CharacterClasses,
) -> Result<PasswordRequest, ValidationError> {
    let length = length
        .parse::<i32>()
        .ok()
        .filter(|n| *n >= MIN_PASSWORD_LENGTH)
        .ok_or(ValidationError::InvalidLength)?;

    if !classes.any() {
        return Err(ValidationError::NoCharacterClass);
    }

    Ok(PasswordRequest::new(length, classes))
}

/// Builds a strength check request.
///
/// # Errors
/// Returns error if the password is empty.
pub fn strength_request(password: &str) -> Result<PasswordStrengthRequest, ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(PasswordStrengthRequest {
        password: password.to_string(),
    })
}

/// Builds a login request.
///
/// # Errors
/// Returns error if either field is empty.
pub fn login_request(username: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    require_fields(username, password)?;
    Ok(LoginRequest::new(username, password))
}

/// Builds a registration request.
///
/// # Errors
/// Returns error if either field is empty.
pub fn register_request(
    username: &str,
    password: &str,
) -> Result<RegisterRequest, ValidationError> {
    require_fields(username, password)?;
    Ok(RegisterRequest::new(username, password))
}

fn require_fields(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("3" ; "below_minimum")]
    #[test_case("0" ; "zero")]
    #[test_case("-8" ; "negative")]
    #[test_case("" ; "empty")]
    #[test_case("twelve" ; "not_numeric")]
    #[test_case("12.5" ; "fractional")]
    #[test_case(" 12" ; "leading_space")]
    #[test_case("99999999999" ; "overflow")]
    fn test_invalid_length_rejected(length: &str) {
        assert_eq!(
            password_request(length, CharacterClasses::default()),
            Err(ValidationError::InvalidLength)
        );
    }

    #[test_case("4", 4 ; "minimum")]
    #[test_case("12", 12 ; "default")]
    #[test_case("+64", 64 ; "explicit_sign")]
    fn test_valid_length_accepted(length: &str, expected: i32) {
        let request = password_request(length, CharacterClasses::default()).unwrap();
        assert_eq!(request.length, expected);
    }

    #[test]
    fn test_length_checked_before_classes() {
        let none = CharacterClasses {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        };
        assert_eq!(
            password_request("2", none),
            Err(ValidationError::InvalidLength)
        );
        assert_eq!(
            password_request("8", none),
            Err(ValidationError::NoCharacterClass)
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "Invalid password length. Must be at least 4."
        );
        assert_eq!(
            ValidationError::NoCharacterClass.to_string(),
            "At least one character type must be selected."
        );
    }

    #[test]
    fn test_empty_strength_password() {
        assert_eq!(strength_request(""), Err(ValidationError::EmptyPassword));
        assert!(strength_request(" ").is_ok());
    }

    #[test_case("", "pw" ; "no_username")]
    #[test_case("alice", "" ; "no_password")]
    fn test_credentials_require_both_fields(username: &str, password: &str) {
        assert_eq!(
            login_request(username, password).unwrap_err(),
            ValidationError::MissingFields
        );
        assert_eq!(
            register_request(username, password).unwrap_err(),
            ValidationError::MissingFields
        );
    }
}
