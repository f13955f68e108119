use crate::api::shared_client;
use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    // Restore the stored session, then confirm it with the service
    use_effect_with((), move |_| {
        let client = shared_client();
        dispatch.set(AppState::restored(client.store()));
        spawn_local(async move {
            let user = client.get_current_user().await;
            if user.is_none() {
                tracing::info!("no valid session; showing guest routes");
            }
            dispatch.set(AppState::verified(user));
        });
        || ()
    });

    if !state.checked {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
