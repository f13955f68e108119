use shared::{SessionStore, models::CurrentUser};
use yewdux::Store;

/// Global UI state shared through `yewdux`.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Set once the stored session has been checked against the service.
    pub checked: bool,
    pub user: Option<CurrentUser>,
}

impl AppState {
    /// State restored from `store` before the service has confirmed it.
    pub fn restored<S: SessionStore>(store: &S) -> Self {
        let user = store.load().map(|session| CurrentUser {
            user_id: session.user_id,
            user_name: session.user_name,
        });
        Self {
            checked: false,
            user,
        }
    }

    /// State after the current-user check finished.
    pub fn verified(user: Option<CurrentUser>) -> Self {
        Self {
            checked: true,
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
