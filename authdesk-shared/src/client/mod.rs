//! # Auth client
//!
//! Talks to the remote authentication service and keeps the
//! [`SessionStore`] in step with its answers. Every call is a single
//! attempt; failures are logged here and handed back to the caller, which
//! owns the user-facing message.

mod error;

pub use error::ClientError;

use reqwest::{Client, Response, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    config::{ClientConfig, Endpoint},
    forms::validation::ValidationError,
    models::{
        AuthResponse, CurrentUser, ErrorResponse, LoginRequest, RegisterRequest,
        UpdateUserRequest, UserProfile,
    },
    session::{Session, SessionKey, SessionStore},
};

/// Client for the login, registration, and profile endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient<S> {
    config: ClientConfig,
    http: Client,
    store: S,
}

impl<S: SessionStore> AuthClient<S> {
    /// Create a client writing its session into `store`.
    pub fn new(config: ClientConfig, store: S) -> Self {
        Self::with_http_client(config, store, Client::new())
    }

    /// Create a client around a preconfigured HTTP client.
    pub fn with_http_client(config: ClientConfig, store: S, http: Client) -> Self {
        Self {
            config,
            http,
            store,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted session, read without contacting the service.
    pub fn session(&self) -> Option<Session> {
        self.store.load()
    }

    /// Whether a logged-in session is persisted.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some_and(|session| session.is_logged_in)
    }

    /// Authenticate with a username and password and persist the session.
    ///
    /// # Errors
    /// - [`ClientError::Network`] when the service is unreachable
    /// - [`ClientError::Auth`] when the credentials are rejected
    /// - [`ClientError::Unexpected`] / [`ClientError::Server`] otherwise
    #[instrument(skip_all, fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let url = self.config.endpoint_url(Endpoint::Login);

        match self.post_for_session(&url, &request).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "login succeeded");
                Ok(session)
            }
            Err(err) => {
                error!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// Create an account and persist the resulting session.
    ///
    /// The password confirmation is checked locally first; a mismatch fails
    /// without contacting the service.
    ///
    /// # Errors
    /// - [`ClientError::Validation`] when the passwords differ
    /// - [`ClientError::Auth`] with the service's detail, e.g. a taken name
    /// - [`ClientError::Network`] / [`ClientError::Server`] /
    ///   [`ClientError::Unexpected`] otherwise
    #[instrument(skip_all, fields(name = %request.name, categories = request.categories.len()))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError> {
        if !request.passwords_match() {
            warn!("registration refused: passwords do not match");
            return Err(ValidationError::PasswordsDoNotMatch.into());
        }
        let url = self.config.endpoint_url(Endpoint::Register);

        match self.post_for_session(&url, request).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "registration succeeded");
                Ok(session)
            }
            Err(err) => {
                error!(error = %err, detail = ?err.detail(), "registration failed");
                Err(err)
            }
        }
    }

    /// Update the current user's profile.
    ///
    /// The cached user name follows the service's answer when a new name was
    /// submitted.
    ///
    /// # Errors
    /// - [`ClientError::AuthRequired`] when no token is stored (no request is
    ///   sent)
    /// - [`ClientError::Validation`] when both password fields are present
    ///   and differ
    /// - any transport or service error
    #[instrument(skip_all)]
    pub async fn update_user_info(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile, ClientError> {
        let Some(token) = self.store.token() else {
            warn!("profile update refused: no session token");
            return Err(ClientError::AuthRequired);
        };
        if !request.passwords_match() {
            warn!("profile update refused: passwords do not match");
            return Err(ValidationError::PasswordsDoNotMatch.into());
        }

        match self.put_profile(&token, request).await {
            Ok(profile) => {
                info!(user_id = %profile.id, "profile updated");
                Ok(profile)
            }
            Err(err) => {
                error!(error = %err, detail = ?err.detail(), "profile update failed");
                Err(err)
            }
        }
    }

    /// Validate the stored token and refresh the cached identity.
    ///
    /// Returns `None` without a request when the store is unavailable or
    /// empty. Any failure of the check is treated as an invalid token: the
    /// whole session is cleared and `None` is returned.
    #[instrument(skip_all)]
    pub async fn get_current_user(&self) -> Option<CurrentUser> {
        if !self.store.is_available() {
            debug!("session storage unavailable; skipping current user check");
            return None;
        }
        let token = self.store.token()?;

        match self.fetch_current_user(&token).await {
            Ok(user) => {
                debug!(user_id = %user.user_id, "session validated");
                Some(user)
            }
            Err(err) => {
                error!(error = %err, "current user check failed; clearing session");
                if let Err(clear_err) = self.store.clear() {
                    error!(error = %clear_err, "stale session could not be fully cleared");
                }
                None
            }
        }
    }

    /// Forget the session. Purely local.
    ///
    /// Every key is removed even when one of them fails.
    ///
    /// # Errors
    /// Returns [`ClientError::Storage`] if the backend kept any key.
    pub fn logout(&self) -> Result<(), ClientError> {
        match self.store.clear() {
            Ok(()) => {
                info!("session cleared");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "logout could not clear the session");
                Err(err.into())
            }
        }
    }

    async fn post_for_session<B>(&self, url: &str, body: &B) -> Result<Session, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;
        let auth: AuthResponse = decode(response).await?;
        let session = Session::from(auth);
        self.store.save(&session)?;
        Ok(session)
    }

    async fn put_profile(
        &self,
        token: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile, ClientError> {
        let url = self.config.endpoint_url(Endpoint::CurrentUser);
        let response = self
            .http
            .put(url)
            .header(AUTHORIZATION, bearer(token))
            .json(request)
            .send()
            .await
            .map_err(ClientError::Network)?;
        let profile: UserProfile = decode(response).await?;

        if request.name.is_some() && !profile.name.is_empty() {
            self.store.set(SessionKey::UserName, &profile.name)?;
        }
        Ok(profile)
    }

    async fn fetch_current_user(&self, token: &str) -> Result<CurrentUser, ClientError> {
        let url = self.config.endpoint_url(Endpoint::CurrentUser);
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await
            .map_err(ClientError::Network)?;
        let user = CurrentUser::from(decode::<UserProfile>(response).await?);

        self.store.set(SessionKey::UserId, &user.user_id)?;
        self.store.set(SessionKey::UserName, &user.user_name)?;
        Ok(user)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(ClientError::Network)?;

    if !status.is_success() {
        return Err(ClientError::from_status(
            status,
            ErrorResponse::detail_from_body(&body),
        ));
    }

    serde_json::from_str(&body)
        .map_err(|err| ClientError::Unexpected(format!("malformed response body: {err}")))
}
