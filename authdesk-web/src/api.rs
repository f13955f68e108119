use std::rc::Rc;

use once_cell::unsync::OnceCell;
use shared::AuthClient;

use crate::{config::FrontendConfig, storage::BrowserSessionStore};

/// Client type used by every page.
pub type WebClient = AuthClient<BrowserSessionStore>;

thread_local! {
    static SHARED_CLIENT: OnceCell<Rc<WebClient>> = const { OnceCell::new() };
}

/// The application's auth client, built from [`FrontendConfig`] on first
/// use. Every later call hands out the same instance.
pub fn shared_client() -> Rc<WebClient> {
    SHARED_CLIENT.with(|cell| {
        Rc::clone(cell.get_or_init(|| {
            let config = FrontendConfig::new();
            tracing::debug!(
                base_url = config.client().api_base_url(),
                path_style = config.client().path_style().as_str(),
                "creating auth client"
            );
            Rc::new(AuthClient::new(config.client, BrowserSessionStore))
        }))
    })
}
