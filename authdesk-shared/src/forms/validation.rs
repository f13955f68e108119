//! Local validation for the login and registration forms.
//!
//! These checks run before any request is issued; a failure never reaches
//! the network.

use thiserror::Error;

/// Validation errors that can occur during form validation.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("a required field is empty")]
    Required,
    /// Password confirmation doesn't match password
    #[error("the passwords do not match")]
    PasswordsDoNotMatch,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => super::keys::REQUIRED,
            Self::PasswordsDoNotMatch => super::keys::PASSWORD_MISMATCH,
        }
    }
}

/// Validates that a field holds something other than whitespace.
///
/// # Errors
/// Returns [`ValidationError::Required`] for blank input.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates that a secret was entered at all.
///
/// Whitespace counts as content; password policy belongs to the service.
///
/// # Errors
/// Returns [`ValidationError::Required`] for an empty string.
pub fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Errors
/// - [`ValidationError::Required`] if the confirmation is empty
/// - [`ValidationError::PasswordsDoNotMatch`] if it differs from `password`
///   (compared exactly, whitespace included)
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_present(confirm_password)?;

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("alice" ; "plain")]
    #[test_case("  padded  " ; "padded")]
    #[test_case("鈴木太郎" ; "non ascii")]
    fn required_accepts_content(value: &str) {
        assert!(validate_required(value).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case("\t\n" ; "other whitespace")]
    fn required_rejects_blank(value: &str) {
        assert_eq!(validate_required(value), Err(ValidationError::Required));
    }

    #[test_case("   " ; "spaces")]
    #[test_case(" pw " ; "padded")]
    fn present_accepts_whitespace(value: &str) {
        assert!(validate_present(value).is_ok());
    }

    #[test]
    fn present_rejects_empty() {
        assert_eq!(validate_present(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_confirm_password_valid() {
        assert!(validate_confirm_password("password123", "password123").is_ok());
        assert!(validate_confirm_password("pass word", "pass word").is_ok());
        assert!(validate_confirm_password("   ", "   ").is_ok());
    }

    #[test]
    fn test_validate_confirm_password_invalid() {
        assert_eq!(
            validate_confirm_password("", "password123"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("different", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        // Case sensitive comparison
        assert_eq!(
            validate_confirm_password("Password123", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        // Spaces matter in comparison
        assert_eq!(
            validate_confirm_password("password ", "password"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn message_keys_are_distinct() {
        assert_ne!(
            ValidationError::Required.message_key(),
            ValidationError::PasswordsDoNotMatch.message_key()
        );
    }
}
