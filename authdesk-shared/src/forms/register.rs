use tracing::debug;

use super::{
    FailureMessage, FormError, FormStatus, keys,
    validation::{validate_confirm_password, validate_present, validate_required},
};
use crate::{
    client::{AuthClient, ClientError},
    models::{Category, RegisterRequest, UpdateUserRequest, UserProfile},
    session::{Session, SessionStore},
};

/// Which operation the registration screen performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegisterMode {
    /// Create a new account.
    #[default]
    Register,
    /// Change the name and categories of the logged-in account.
    UpdateInfo,
}

/// Request produced by [`RegisterForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterSubmission {
    Register(RegisterRequest),
    Update(UpdateUserRequest),
}

impl RegisterSubmission {
    /// Send the request through the client operation matching its mode.
    ///
    /// # Errors
    /// Whatever [`AuthClient::register`] or [`AuthClient::update_user_info`]
    /// returns.
    pub async fn send<S: SessionStore>(
        self,
        client: &AuthClient<S>,
    ) -> Result<RegisterOutcome, ClientError> {
        match self {
            Self::Register(request) => client
                .register(&request)
                .await
                .map(RegisterOutcome::Registered),
            Self::Update(request) => client
                .update_user_info(&request)
                .await
                .map(RegisterOutcome::Updated),
        }
    }
}

/// Successful result of [`RegisterForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered(Session),
    Updated(UserProfile),
}

/// Controller behind the registration / profile screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    categories: Vec<Category>,
    categories_touched: bool,
    mode: RegisterMode,
    status: FormStatus,
}

impl RegisterForm {
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

    #[must_use]
    pub fn mode(&self) -> RegisterMode {
        self.mode
    }

    /// Selected categories in the order they were picked.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn is_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Select or deselect `category`. Ignored while busy.
    pub fn toggle_category(&mut self, category: Category) {
        if self.is_busy() {
            return;
        }
        if let Some(index) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(index);
        } else {
            self.categories.push(category);
        }
        self.categories_touched = true;
    }

    /// Clear every input and any error. Ignored while busy.
    pub fn reset(&mut self) {
        if self.is_busy() {
            return;
        }
        self.name.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.categories.clear();
        self.categories_touched = false;
        self.status = FormStatus::Idle;
    }

    /// Switch mode; the form is reset. Ignored while busy.
    pub fn set_mode(&mut self, mode: RegisterMode) {
        if self.is_busy() || self.mode == mode {
            return;
        }
        self.reset();
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            RegisterMode::Register => RegisterMode::UpdateInfo,
            RegisterMode::UpdateInfo => RegisterMode::Register,
        };
        self.set_mode(next);
    }

    /// Validate the inputs for the current mode and enter the submitting
    /// state.
    ///
    /// In register mode the passwords must match before anything is sent.
    /// Update mode submits the name, plus the categories once the selection
    /// has been edited; an untouched selection leaves the stored ones alone.
    ///
    /// # Errors
    /// - [`FormError::Busy`] if a submission is in flight (state untouched)
    /// - [`FormError::Invalid`] on a blank field or password mismatch
    pub fn begin_submit(&mut self) -> Result<RegisterSubmission, FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }
        if let Err(err) = self.validate() {
            self.status = FormStatus::Failed(FailureMessage::Key(err.message_key()));
            return Err(err.into());
        }

        let name = self.name.clone();
        let submission = match self.mode {
            RegisterMode::Register => RegisterSubmission::Register(RegisterRequest {
                name,
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
                categories: self.categories.clone(),
            }),
            RegisterMode::UpdateInfo => {
                let mut request = UpdateUserRequest::default().with_name(name);
                if self.categories_touched {
                    request = request.with_categories(self.categories.clone());
                }
                RegisterSubmission::Update(request)
            }
        };
        self.status = FormStatus::Submitting;
        Ok(submission)
    }

    fn validate(&self) -> Result<(), super::ValidationError> {
        validate_required(&self.name)?;
        if self.mode == RegisterMode::Register {
            validate_present(&self.password)?;
            validate_confirm_password(&self.confirm_password, &self.password)?;
        }
        Ok(())
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    ///
    /// # Errors
    /// Returns [`FormError::Failed`] with the message now shown by the form.
    pub fn complete<T>(&mut self, result: Result<T, ClientError>) -> Result<T, FormError> {
        match result {
            Ok(value) => {
                self.password.clear();
                self.confirm_password.clear();
                self.status = FormStatus::Succeeded;
                Ok(value)
            }
            Err(err) => {
                let generic = match self.mode {
                    RegisterMode::Register => keys::REGISTER_GENERIC,
                    RegisterMode::UpdateInfo => keys::UPDATE_GENERIC,
                };
                let message = FailureMessage::from_client_error(&err, generic);
                debug!(%message, mode = ?self.mode, "register form failed");
                self.status = FormStatus::Failed(message.clone());
                Err(FormError::Failed(message))
            }
        }
    }

    /// Validate, call the matching client operation, and record the outcome.
    ///
    /// # Errors
    /// See [`Self::begin_submit`] and [`Self::complete`].
    pub async fn submit<S: SessionStore>(
        &mut self,
        client: &AuthClient<S>,
    ) -> Result<RegisterOutcome, FormError> {
        let submission = self.begin_submit()?;
        let result = submission.send(client).await;
        self.complete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use reqwest::StatusCode;

    fn filled() -> RegisterForm {
        let mut form = RegisterForm::new();
        form.name = "bob".into();
        form.password = "pw-123456".into();
        form.confirm_password = "pw-123456".into();
        form
    }

    #[test]
    fn toggle_category_preserves_selection_order() {
        let mut form = RegisterForm::new();
        form.toggle_category(Category::Finance);
        form.toggle_category(Category::System);
        form.toggle_category(Category::Legal);
        form.toggle_category(Category::Finance);

        assert_eq!(form.categories(), &[Category::System, Category::Legal]);
        assert!(form.is_selected(Category::Legal));
        assert!(!form.is_selected(Category::Finance));
    }

    #[test]
    fn register_submission_carries_exact_categories() {
        let mut form = filled();
        form.toggle_category(Category::System);
        form.toggle_category(Category::Finance);

        let Ok(RegisterSubmission::Register(request)) = form.begin_submit() else {
            panic!("expected a register submission");
        };
        assert_eq!(request.categories, vec![Category::System, Category::Finance]);
        assert_eq!(request.name, "bob");
        assert!(form.is_busy());
    }

    #[test]
    fn password_mismatch_short_circuits() {
        let mut form = filled();
        form.confirm_password = "something-else".into();

        assert_eq!(
            form.begin_submit(),
            Err(FormError::Invalid(ValidationError::PasswordsDoNotMatch))
        );
        assert_eq!(
            form.status().failure(),
            Some(&FailureMessage::Key(keys::PASSWORD_MISMATCH))
        );
        assert!(!form.is_busy());
    }

    #[test]
    fn busy_form_ignores_edits_and_resubmits() {
        let mut form = filled();
        form.begin_submit().unwrap();

        form.toggle_category(Category::Design);
        form.reset();
        form.toggle_mode();

        assert!(form.categories().is_empty());
        assert_eq!(form.name, "bob");
        assert_eq!(form.mode(), RegisterMode::Register);
        assert_eq!(form.begin_submit(), Err(FormError::Busy));
    }

    #[test]
    fn reset_clears_inputs_and_error() {
        let mut form = filled();
        form.toggle_category(Category::Sales);
        form.confirm_password = "nope".into();
        let _ = form.begin_submit();

        form.reset();
        assert_eq!(form, RegisterForm::new());
    }

    #[test]
    fn toggle_mode_resets_the_form() {
        let mut form = filled();
        form.toggle_category(Category::Sales);
        form.toggle_mode();

        assert_eq!(form.mode(), RegisterMode::UpdateInfo);
        assert!(form.name.is_empty());
        assert!(form.categories().is_empty());

        form.toggle_mode();
        assert_eq!(form.mode(), RegisterMode::Register);
    }

    fn update_request(form: &mut RegisterForm) -> UpdateUserRequest {
        match form.begin_submit() {
            Ok(RegisterSubmission::Update(request)) => request,
            other => panic!("expected an update submission, got {other:?}"),
        }
    }

    #[test]
    fn rename_only_update_sends_just_the_name() {
        let mut form = RegisterForm::new();
        form.set_mode(RegisterMode::UpdateInfo);
        form.name = "robert".into();

        let request = update_request(&mut form);
        assert_eq!(request.categories, None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "name": "robert" })
        );
    }

    #[test]
    fn edited_selection_is_sent_on_update() {
        let mut form = RegisterForm::new();
        form.set_mode(RegisterMode::UpdateInfo);
        form.name = "robert".into();
        form.toggle_category(Category::Design);

        assert_eq!(
            update_request(&mut form),
            UpdateUserRequest::default()
                .with_name("robert")
                .with_categories(vec![Category::Design])
        );
    }

    #[test]
    fn deselecting_everything_sends_an_empty_list() {
        let mut form = RegisterForm::new();
        form.set_mode(RegisterMode::UpdateInfo);
        form.name = "robert".into();
        form.toggle_category(Category::Design);
        form.toggle_category(Category::Design);

        assert_eq!(update_request(&mut form).categories, Some(Vec::new()));
    }

    #[test]
    fn name_is_sent_as_typed() {
        let mut form = filled();
        form.name = " bob ".into();

        let Ok(RegisterSubmission::Register(request)) = form.begin_submit() else {
            panic!("expected a register submission");
        };
        assert_eq!(request.name, " bob ");
    }

    #[test]
    fn whitespace_password_is_accepted() {
        let mut form = filled();
        form.password = "   ".into();
        form.confirm_password = "   ".into();

        let Ok(RegisterSubmission::Register(request)) = form.begin_submit() else {
            panic!("expected a register submission");
        };
        assert_eq!(request.password, "   ");
    }

    #[test]
    fn empty_password_is_required() {
        let mut form = filled();
        form.password.clear();

        assert_eq!(
            form.begin_submit(),
            Err(FormError::Invalid(ValidationError::Required))
        );
    }

    #[test]
    fn failures_use_mode_specific_fallback() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let result: Result<Session, _> = form.complete(Err(ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            None,
        )));
        assert_eq!(
            result,
            Err(FormError::Failed(FailureMessage::Key(keys::REGISTER_GENERIC)))
        );

        let mut form = RegisterForm::new();
        form.set_mode(RegisterMode::UpdateInfo);
        form.name = "robert".into();
        form.begin_submit().unwrap();
        let result: Result<UserProfile, _> = form.complete(Err(ClientError::AuthRequired));
        assert_eq!(
            result,
            Err(FormError::Failed(FailureMessage::Key(keys::AUTH_REQUIRED)))
        );
    }

    #[test]
    fn duplicate_name_detail_is_surfaced() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let _: Result<Session, _> = form.complete(Err(ClientError::from_status(
            StatusCode::BAD_REQUEST,
            Some("Username already registered".into()),
        )));

        assert_eq!(
            form.status().failure(),
            Some(&FailureMessage::Detail("Username already registered".into()))
        );
    }
}
