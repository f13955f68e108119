use tracing::debug;

use super::{
    FailureMessage, FormError, FormStatus, keys,
    validation::{validate_present, validate_required},
};
use crate::{
    client::{AuthClient, ClientError},
    models::LoginRequest,
    session::{Session, SessionStore},
};

/// Controller behind the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    status: FormStatus,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Validate the inputs and enter the submitting state.
    ///
    /// # Errors
    /// - [`FormError::Busy`] if a submission is in flight (state untouched)
    /// - [`FormError::Invalid`] if a field is blank (the form shows the error)
    pub fn begin_submit(&mut self) -> Result<LoginRequest, FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }
        if let Err(err) = validate_required(&self.username).and(validate_present(&self.password)) {
            self.status = FormStatus::Failed(FailureMessage::Key(err.message_key()));
            return Err(err.into());
        }

        self.status = FormStatus::Submitting;
        Ok(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    ///
    /// # Errors
    /// Returns [`FormError::Failed`] with the message now shown by the form.
    pub fn complete(&mut self, result: Result<Session, ClientError>) -> Result<Session, FormError> {
        match result {
            Ok(session) => {
                self.password.clear();
                self.status = FormStatus::Succeeded;
                Ok(session)
            }
            Err(err) => {
                let message = if err.is_unauthorized() && err.detail().is_none() {
                    FailureMessage::Key(keys::LOGIN_INVALID_CREDENTIALS)
                } else {
                    FailureMessage::from_client_error(&err, keys::LOGIN_GENERIC)
                };
                debug!(%message, "login form failed");
                self.status = FormStatus::Failed(message.clone());
                Err(FormError::Failed(message))
            }
        }
    }

    /// Validate, log in through `client`, and record the outcome.
    ///
    /// # Errors
    /// See [`Self::begin_submit`] and [`Self::complete`].
    pub async fn submit<S: SessionStore>(
        &mut self,
        client: &AuthClient<S>,
    ) -> Result<Session, FormError> {
        let request = self.begin_submit()?;
        let result = client.login(&request.username, &request.password).await;
        self.complete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use reqwest::StatusCode;

    fn filled() -> LoginForm {
        LoginForm {
            username: " alice ".into(),
            password: "correct-pw".into(),
            ..LoginForm::default()
        }
    }

    fn session() -> Session {
        Session {
            token: "tok1".into(),
            user_id: "7".into(),
            user_name: "alice".into(),
            is_logged_in: true,
        }
    }

    #[test]
    fn begin_submit_sends_credentials_as_typed() {
        let mut form = filled();
        let request = form.begin_submit().unwrap();

        assert_eq!(request.username, " alice ");
        assert_eq!(request.password, "correct-pw");
        assert!(form.is_busy());
        assert!(!form.can_submit());
    }

    #[test]
    fn second_submit_while_busy_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(FormError::Busy));
        assert_eq!(form.status(), &FormStatus::Submitting);
    }

    #[test]
    fn blank_fields_fail_locally() {
        let mut form = LoginForm {
            username: "alice".into(),
            ..LoginForm::default()
        };

        assert_eq!(
            form.begin_submit(),
            Err(FormError::Invalid(ValidationError::Required))
        );
        assert_eq!(
            form.status().failure(),
            Some(&FailureMessage::Key(keys::REQUIRED))
        );
        assert!(!form.can_submit());
    }

    #[test]
    fn whitespace_password_is_left_to_the_service() {
        let mut form = LoginForm {
            username: "alice".into(),
            password: "   ".into(),
            ..LoginForm::default()
        };

        assert!(form.can_submit());
        assert_eq!(form.begin_submit().unwrap().password, "   ");
    }

    #[test]
    fn blank_username_is_refused() {
        let mut form = LoginForm {
            username: "   ".into(),
            password: "pw".into(),
            ..LoginForm::default()
        };

        assert_eq!(
            form.begin_submit(),
            Err(FormError::Invalid(ValidationError::Required))
        );
    }

    #[test]
    fn success_clears_password() {
        let mut form = filled();
        form.begin_submit().unwrap();

        assert_eq!(form.complete(Ok(session())), Ok(session()));
        assert_eq!(form.status(), &FormStatus::Succeeded);
        assert!(form.password.is_empty());
    }

    #[test]
    fn unauthorized_without_detail_reads_as_invalid_credentials() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let result = form.complete(Err(ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            None,
        )));
        assert_eq!(
            result,
            Err(FormError::Failed(FailureMessage::Key(
                keys::LOGIN_INVALID_CREDENTIALS
            )))
        );
        assert!(!form.is_busy());
        assert!(form.can_submit());
    }

    #[test]
    fn server_detail_is_shown_verbatim() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let _ = form.complete(Err(ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            Some("Incorrect username or password".into()),
        )));
        assert_eq!(
            form.status().failure(),
            Some(&FailureMessage::Detail(
                "Incorrect username or password".into()
            ))
        );
    }
}
