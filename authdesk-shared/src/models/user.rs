use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, UserId};

/// User record returned by the current-user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique identifier for the user.
    pub id: UserId,

    /// The user's name.
    pub name: String,

    /// Category labels as stored by the service.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Identity cached in the session store after a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub user_name: String,
}

impl From<UserProfile> for CurrentUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.id.into(),
            user_name: profile.name,
        }
    }
}

/// Partial profile update; absent fields are left untouched by the service.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

impl UpdateUserRequest {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_password(
        mut self,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        self.password = Some(password.into());
        self.confirm_password = Some(confirm_password.into());
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Returns `true` when no field would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.categories.is_none()
    }

    /// Returns `false` only when both password fields are present and differ.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        match (&self.password, &self.confirm_password) {
            (Some(password), Some(confirm)) => password == confirm,
            _ => true,
        }
    }
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("UpdateUserRequest")
            .field("name", &self.name)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .field("categories", &self.categories)
            .finish()
    }
}
