use crate::{api::shared_client, models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

/// Callback that forgets the session and routes to the login page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Err(err) = shared_client().logout() {
            tracing::error!(error = %err, "logout left session data behind");
        }
        dispatch.set(AppState::verified(None));
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&MainRoute::Login);
        }
    })
}

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let on_logout = use_logout();
    let user_state = use_selector(|state: &AppState| state.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let profile_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&MainRoute::Register);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("home.edit_profile")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-sm">
                {user.user_name.clone()}
            </div>
            <ul tabindex="0" class="dropdown-content menu z-[1] bg-base-200 p-2 rounded-box shadow w-52">
                {profile_button}
                <li><a onclick={on_logout}>{i18n.t("header.logout")}</a></li>
            </ul>
        </div>
    }
}
