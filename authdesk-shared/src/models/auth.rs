use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Category;

/// Identifier assigned to a user by the authentication service.
///
/// The service may encode it as a JSON number or a string; both are
/// normalised to the decimal string form that is persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Self(number.to_string()),
            RawId::Text(text) => Self(text),
        })
    }
}

/// Credentials submitted to the login endpoint. Never persisted.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account name.
    pub username: String,
    /// The plain-text password.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload for creating a new account.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display and login name of the new account.
    pub name: String,
    /// The chosen password.
    pub password: String,
    /// Must equal `password`; the service re-checks it.
    pub confirm_password: String,
    /// Selected organisational categories, in selection order.
    pub categories: Vec<Category>,
}

impl RegisterRequest {
    /// Returns `true` when both password fields are identical.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("categories", &self.categories)
            .finish()
    }
}

/// Successful response of both the login and register endpoints.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token scheme reported by the service, usually `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Identifier of the authenticated user.
    pub user_id: UserId,
    /// Name of the authenticated user.
    pub user_name: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .finish()
    }
}
