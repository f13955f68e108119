//! # Session store
//!
//! The session is the client-held proof of authentication: a bearer token
//! plus the cached identity of its owner. It lives in a key/value backend
//! (browser `localStorage` in the web app, memory in tests) behind the
//! [`SessionStore`] trait so the auth client never touches ambient globals.

mod memory;

pub use memory::MemorySessionStore;

use std::fmt;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;
use tracing::warn;

use crate::models::AuthResponse;

/// Keys under which session fields are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SessionKey {
    Token,
    UserId,
    UserName,
    IsLoggedIn,
}

impl SessionKey {
    /// Return the storage key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::UserId => "userId",
            Self::UserName => "userName",
            Self::IsLoggedIn => "isLoggedIn",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a session backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("failed to write session key `{key}`: {reason}")]
    Write { key: SessionKey, reason: String },
    #[error("failed to remove session key `{key}`: {reason}")]
    Remove { key: SessionKey, reason: String },
}

/// Persisted authentication state.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub user_name: String,
    pub is_logged_in: bool,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.access_token,
            user_id: response.user_id.into(),
            user_name: response.user_name,
            is_logged_in: true,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .field("is_logged_in", &self.is_logged_in)
            .finish()
    }
}

/// Key/value backend holding the session.
///
/// Implementations only provide raw access; the provided methods define how a
/// [`Session`] maps onto the four keys.
pub trait SessionStore {
    /// Whether the backend can be used at all (e.g. a browser window exists).
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: SessionKey) -> Option<String>;

    /// # Errors
    /// Returns [`StorageError`] if the backend refuses the write.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; removing an absent key succeeds.
    ///
    /// # Errors
    /// Returns [`StorageError`] if the backend refuses the removal.
    fn remove(&self, key: SessionKey) -> Result<(), StorageError>;

    /// The stored bearer token, ignoring empty values.
    fn token(&self) -> Option<String> {
        self.get(SessionKey::Token).filter(|token| !token.is_empty())
    }

    /// Rebuild the session; `None` unless a token is present.
    fn load(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user_id: self.get(SessionKey::UserId).unwrap_or_default(),
            user_name: self.get(SessionKey::UserName).unwrap_or_default(),
            is_logged_in: self.get(SessionKey::IsLoggedIn).as_deref() == Some("true"),
        })
    }

    /// Persist every field of `session`.
    ///
    /// A partial write is rolled back so the store never holds a token without
    /// its identity.
    ///
    /// # Errors
    /// Returns the first [`StorageError`] raised by the backend.
    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let fields = [
            (SessionKey::Token, session.token.as_str()),
            (SessionKey::UserId, session.user_id.as_str()),
            (SessionKey::UserName, session.user_name.as_str()),
            (
                SessionKey::IsLoggedIn,
                if session.is_logged_in { "true" } else { "false" },
            ),
        ];
        for (key, value) in fields {
            if let Err(err) = self.set(key, value) {
                if let Err(rollback) = self.clear() {
                    warn!(error = %rollback, "rollback of a partial session write failed");
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// Remove all session keys.
    ///
    /// Every key is attempted even after a failure.
    ///
    /// # Errors
    /// Returns the first [`StorageError`] raised by the backend.
    fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in SessionKey::iter() {
            if let Err(err) = self.remove(key) {
                warn!(%key, error = %err, "failed to remove session key");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn sample_session() -> Session {
        Session {
            token: "tok1".into(),
            user_id: "7".into(),
            user_name: "alice".into(),
            is_logged_in: true,
        }
    }

    #[test]
    fn keys_match_persisted_names() {
        let names: Vec<_> = SessionKey::iter().map(SessionKey::as_str).collect();
        assert_eq!(names, ["token", "userId", "userName", "isLoggedIn"]);
    }

    #[test]
    fn save_then_load_restores_session() {
        let store = MemorySessionStore::new();
        store.save(&sample_session()).unwrap();

        assert_eq!(store.get(SessionKey::IsLoggedIn).as_deref(), Some("true"));
        assert_eq!(store.load(), Some(sample_session()));
    }

    #[test]
    fn load_requires_a_token() {
        let store = MemorySessionStore::new();
        store.set(SessionKey::UserName, "alice").unwrap();
        assert_eq!(store.load(), None);

        store.set(SessionKey::Token, "").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_tolerates_missing_identity() {
        let store = MemorySessionStore::new();
        store.set(SessionKey::Token, "tok").unwrap();

        let session = store.load().unwrap();
        assert_eq!(session.user_id, "");
        assert!(!session.is_logged_in);
    }

    #[test]
    fn clear_removes_every_key() {
        let store = MemorySessionStore::new();
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        for key in SessionKey::iter() {
            assert_eq!(store.get(key), None);
        }
    }

    #[test]
    fn failed_save_leaves_store_empty() {
        let store = MemorySessionStore::unavailable();
        assert_eq!(
            store.save(&sample_session()),
            Err(StorageError::Unavailable)
        );
        assert!(store.is_empty());
    }

    /// Backend that refuses to delete one key.
    struct StickyKeyStore {
        inner: MemorySessionStore,
        sticky: SessionKey,
    }

    impl SessionStore for StickyKeyStore {
        fn get(&self, key: SessionKey) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
            if key == self.sticky {
                return Err(StorageError::Remove {
                    key,
                    reason: "quota exceeded".into(),
                });
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn clear_reports_failures_and_removes_the_rest() {
        let store = StickyKeyStore {
            inner: MemorySessionStore::new(),
            sticky: SessionKey::UserId,
        };
        store.save(&sample_session()).unwrap();

        assert_eq!(
            store.clear(),
            Err(StorageError::Remove {
                key: SessionKey::UserId,
                reason: "quota exceeded".into(),
            })
        );
        assert_eq!(store.get(SessionKey::Token), None);
        assert_eq!(store.get(SessionKey::UserName), None);
        assert_eq!(store.get(SessionKey::IsLoggedIn), None);
        assert_eq!(store.get(SessionKey::UserId).as_deref(), Some("7"));
    }

    #[test]
    fn session_from_auth_response_marks_logged_in() {
        let session = Session::from(AuthResponse {
            access_token: "tok1".into(),
            token_type: "bearer".into(),
            user_id: UserId::new("7"),
            user_name: "alice".into(),
        });

        assert_eq!(session, sample_session());
        assert!(!format!("{session:?}").contains("tok1"));
    }
}
