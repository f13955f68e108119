//! # Form controllers
//!
//! Transient input state for the login and registration screens. A
//! controller validates locally, holds the busy flag while its request is in
//! flight, and is the single place where a [`ClientError`] becomes a
//! user-facing [`FailureMessage`].
//!
//! Each controller offers a split `begin_submit` / `complete` pair for UIs
//! that must release their borrow across the request, and an async `submit`
//! that runs both halves around an [`AuthClient`](crate::AuthClient) call.

pub mod login;
pub mod register;
pub mod validation;

pub use login::LoginForm;
pub use register::{RegisterForm, RegisterMode, RegisterOutcome, RegisterSubmission};
pub use validation::ValidationError;

use std::fmt;
use thiserror::Error;

use crate::client::ClientError;

/// Translation keys of the messages a form can show.
pub mod keys {
    pub const REQUIRED: &str = "form.error.required";
    pub const PASSWORD_MISMATCH: &str = "register.error.password_mismatch";
    pub const AUTH_REQUIRED: &str = "form.error.auth_required";
    pub const NETWORK: &str = "form.error.network";
    pub const LOGIN_GENERIC: &str = "login.error.generic";
    pub const LOGIN_INVALID_CREDENTIALS: &str = "login.error.invalid_credentials";
    pub const REGISTER_GENERIC: &str = "register.error.generic";
    pub const UPDATE_GENERIC: &str = "register.error.update_generic";
}

/// Text to show after a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMessage {
    /// Message supplied by the service; shown verbatim.
    Detail(String),
    /// Translation key of a localised message.
    Key(&'static str),
}

impl FailureMessage {
    /// Build the message for `err`, preferring the service's detail and
    /// falling back to `generic_key` for unclassified failures.
    #[must_use]
    pub fn from_client_error(err: &ClientError, generic_key: &'static str) -> Self {
        if let Some(detail) = err.detail() {
            return Self::Detail(detail.to_string());
        }
        match err {
            ClientError::AuthRequired => Self::Key(keys::AUTH_REQUIRED),
            ClientError::Validation(validation) => Self::Key(validation.message_key()),
            ClientError::Network(_) => Self::Key(keys::NETWORK),
            _ => Self::Key(generic_key),
        }
    }

    /// Render the message, translating keys with `translate`.
    pub fn resolve(&self, translate: impl Fn(&str) -> String) -> String {
        match self {
            Self::Detail(detail) => detail.clone(),
            Self::Key(key) => translate(key),
        }
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail(detail) => f.write_str(detail),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureMessage),
}

impl FormStatus {
    /// `true` while a request is in flight; controls must be disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FailureMessage> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Why a submission did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already in flight; nothing was sent.
    #[error("a submission is already in progress")]
    Busy,
    /// Local validation failed; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The request was sent and failed.
    #[error("submission failed: {0}")]
    Failed(FailureMessage),
}

impl FormError {
    /// The message the form now displays, if any.
    #[must_use]
    pub fn message(&self) -> Option<FailureMessage> {
        match self {
            Self::Busy => None,
            Self::Invalid(err) => Some(FailureMessage::Key(err.message_key())),
            Self::Failed(message) => Some(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn server_detail_wins() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, Some("name taken".into()));
        assert_eq!(
            FailureMessage::from_client_error(&err, keys::REGISTER_GENERIC),
            FailureMessage::Detail("name taken".into())
        );
    }

    #[test]
    fn generic_key_is_the_fallback() {
        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(
            FailureMessage::from_client_error(&err, keys::REGISTER_GENERIC),
            FailureMessage::Key(keys::REGISTER_GENERIC)
        );

        let err = ClientError::Unexpected("garbage".into());
        assert_eq!(
            FailureMessage::from_client_error(&err, keys::LOGIN_GENERIC),
            FailureMessage::Key(keys::LOGIN_GENERIC)
        );
    }

    #[test]
    fn local_errors_map_to_their_keys() {
        assert_eq!(
            FailureMessage::from_client_error(&ClientError::AuthRequired, keys::UPDATE_GENERIC),
            FailureMessage::Key(keys::AUTH_REQUIRED)
        );
        assert_eq!(
            FailureMessage::from_client_error(
                &ClientError::Validation(ValidationError::PasswordsDoNotMatch),
                keys::REGISTER_GENERIC
            ),
            FailureMessage::Key(keys::PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn resolve_translates_keys_only() {
        let translate = |key: &str| format!("[{key}]");
        assert_eq!(
            FailureMessage::Key(keys::NETWORK).resolve(translate),
            "[form.error.network]"
        );
        assert_eq!(
            FailureMessage::Detail("raw".into()).resolve(translate),
            "raw"
        );
    }

    #[test]
    fn status_helpers() {
        assert!(FormStatus::Submitting.is_busy());
        assert!(!FormStatus::Idle.is_busy());
        assert_eq!(
            FormStatus::Failed(FailureMessage::Key(keys::REQUIRED)).failure(),
            Some(&FailureMessage::Key(keys::REQUIRED))
        );
        assert_eq!(FormError::Busy.message(), None);
    }
}
