use crate::{components::use_logout, models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Home page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();
    let on_logout = use_logout();
    let user = use_selector(|state: &AppState| state.user.clone());
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    html! {
        <div class="card w-full max-w-md bg-base-200 shadow-xl self-start">
            <div class="card-body space-y-2">
                <h1 class="card-title text-2xl">
                    {i18n.t("home.greeting")}{" "}{user.user_name}
                </h1>
                <p class="text-sm text-base-content/70">
                    {i18n.t("home.user_id")}{": "}{user.user_id}
                </p>
                <div class="card-actions justify-end">
                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-ghost">
                        {i18n.t("home.edit_profile")}
                    </Link<MainRoute>>
                    <button class="btn btn-primary" onclick={on_logout}>
                        {i18n.t("home.logout")}
                    </button>
                </div>
            </div>
        </div>
    }
}
