use reqwest::StatusCode;
use thiserror::Error;

use crate::{forms::validation::ValidationError, session::StorageError};

/// Failure of an auth client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached or the body could not be read.
    #[error("unable to reach the authentication service: {0}")]
    Network(#[source] reqwest::Error),

    /// The service rejected the request with a 4xx status.
    #[error("request rejected with status {status}")]
    Auth {
        status: StatusCode,
        detail: Option<String>,
    },

    /// A token-requiring operation was attempted without a session.
    #[error("authentication required: no session token is stored")]
    AuthRequired,

    /// Local input checks failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service failed with a non-4xx error status.
    #[error("authentication service failed with status {status}")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },

    /// A success response could not be understood.
    #[error("unexpected response from the authentication service: {0}")]
    Unexpected(String),

    /// The session backend refused to persist the result.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Classify an error status and its optional detail message.
    #[must_use]
    pub fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        if status.is_client_error() {
            Self::Auth { status, detail }
        } else {
            Self::Server { status, detail }
        }
    }

    /// Message supplied by the service, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Auth { detail, .. } | Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            _ => None,
        }
    }

    /// `true` for 401/403 responses, i.e. bad credentials or a dead token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_classified() {
        let rejected = ClientError::from_status(StatusCode::BAD_REQUEST, Some("taken".into()));
        assert!(matches!(rejected, ClientError::Auth { .. }));
        assert_eq!(rejected.detail(), Some("taken"));
        assert_eq!(rejected.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!rejected.is_unauthorized());

        let failed = ClientError::from_status(StatusCode::BAD_GATEWAY, None);
        assert!(matches!(failed, ClientError::Server { .. }));
        assert_eq!(failed.detail(), None);
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ClientError::from_status(StatusCode::UNAUTHORIZED, None).is_unauthorized());
        assert!(ClientError::from_status(StatusCode::FORBIDDEN, None).is_unauthorized());
        assert!(!ClientError::AuthRequired.is_unauthorized());
    }

    #[test]
    fn local_errors_have_no_status() {
        let validation = ClientError::from(ValidationError::PasswordsDoNotMatch);
        assert_eq!(validation.status(), None);
        assert_eq!(validation.to_string(), "the passwords do not match");
        assert_eq!(ClientError::AuthRequired.detail(), None);
    }
}
