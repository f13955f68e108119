//! `localStorage`-backed session store.

use gloo_storage::{LocalStorage, Storage};
use shared::{SessionKey, SessionStore, StorageError};
use wasm_bindgen::JsValue;

/// Session store persisting raw string values in the browser's
/// `localStorage`.
///
/// Every call reports the store as unavailable when there is no window or
/// the browser refuses access (private mode, disabled storage).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn raw() -> Option<web_sys::Storage> {
        // `LocalStorage::raw` throws when storage is missing, so check for it first.
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();
        available.then(LocalStorage::raw)
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStore for BrowserSessionStore {
    fn is_available(&self) -> bool {
        Self::raw().is_some()
    }

    fn get(&self, key: SessionKey) -> Option<String> {
        Self::raw()?.get_item(key.as_str()).ok().flatten()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError> {
        let storage = Self::raw().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key.as_str(), value)
            .map_err(|err| StorageError::Write {
                key,
                reason: describe(&err),
            })
    }

    fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
        let storage = Self::raw().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key.as_str())
            .map_err(|err| StorageError::Remove {
                key,
                reason: describe(&err),
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::Session;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn values_are_stored_unquoted() {
        let store = BrowserSessionStore;
        store.clear().unwrap();
        store
            .save(&Session {
                token: "tok1".into(),
                user_id: "7".into(),
                user_name: "alice".into(),
                is_logged_in: true,
            })
            .unwrap();

        let raw = LocalStorage::raw();
        assert_eq!(raw.get_item("token").unwrap().as_deref(), Some("tok1"));
        assert_eq!(raw.get_item("isLoggedIn").unwrap().as_deref(), Some("true"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(raw.get_item("userName").unwrap(), None);
    }
}
