use crate::{
    api::shared_client,
    components::ErrorAlert,
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::{forms::LoginForm, models::CurrentUser};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_mut_ref(LoginForm::new);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = form.borrow_mut().begin_submit();
            redraw.force_update();
            let Ok(request) = request else {
                return;
            };

            let form = form.clone();
            let redraw = redraw.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let result = shared_client()
                    .login(&request.username, &request.password)
                    .await;
                let outcome = form.borrow_mut().complete(result);
                redraw.force_update();

                if let Ok(session) = outcome {
                    dispatch.set(AppState::verified(Some(CurrentUser {
                        user_id: session.user_id,
                        user_name: session.user_name,
                    })));
                    if let Some(navigator) = navigator {
                        navigator.push(&MainRoute::Home);
                    }
                }
            });
        })
    };

    let on_username_change = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().username = input.value();
                redraw.force_update();
            }
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().password = input.value();
                redraw.force_update();
            }
        })
    };

    let form = form.borrow();
    let is_busy = form.is_busy();

    html! {
        <div class="flex items-center justify-center w-full">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    <ErrorAlert message={form.status().failure().cloned()} />
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{i18n.t("login.username")}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered w-full"
                            type="text"
                            autocomplete="username"
                            required=true
                            disabled={is_busy}
                            value={form.username.clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{i18n.t("login.password")}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered w-full"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            disabled={is_busy}
                            value={form.password.clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={!form.can_submit()}>
                            {if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {i18n.t("login.no_account")}{" "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {i18n.t("login.register_link")}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
