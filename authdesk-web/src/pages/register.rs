use crate::{
    api::shared_client,
    components::{CategoryPicker, ErrorAlert},
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::{
    forms::{RegisterForm, RegisterMode, RegisterOutcome},
    models::{Category, CurrentUser},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_store;

/// Text inputs of the registration form.
#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Password,
    ConfirmPassword,
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_mut_ref(RegisterForm::new);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let navigator = navigator.clone();
        let i18n = i18n.clone();
        let current_user = state.user.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let submission = form.borrow_mut().begin_submit();
            redraw.force_update();
            let Ok(submission) = submission else {
                return;
            };

            let form = form.clone();
            let redraw = redraw.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let i18n = i18n.clone();
            let current_user = current_user.clone();
            spawn_local(async move {
                let result = submission.send(&shared_client()).await;
                let outcome = form.borrow_mut().complete(result);
                redraw.force_update();

                let user = match outcome {
                    Ok(RegisterOutcome::Registered(session)) => {
                        show_alert(&i18n.t("register.success"));
                        CurrentUser {
                            user_id: session.user_id,
                            user_name: session.user_name,
                        }
                    }
                    Ok(RegisterOutcome::Updated(profile)) => {
                        show_alert(&i18n.t("register.update_success"));
                        let user_name = if profile.name.is_empty() {
                            current_user.map(|user| user.user_name).unwrap_or_default()
                        } else {
                            profile.name
                        };
                        CurrentUser {
                            user_id: profile.id.into(),
                            user_name,
                        }
                    }
                    Err(_) => return,
                };
                dispatch.set(AppState::verified(Some(user)));
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Home);
                }
            });
        })
    };

    let on_input = |field: Field| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut form = form.borrow_mut();
                let target = match field {
                    Field::Name => &mut form.name,
                    Field::Password => &mut form.password,
                    Field::ConfirmPassword => &mut form.confirm_password,
                };
                *target = input.value();
                drop(form);
                redraw.force_update();
            }
        })
    };

    let on_toggle = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |category: Category| {
            form.borrow_mut().toggle_category(category);
            redraw.force_update();
        })
    };

    let on_mode_toggle = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: Event| {
            form.borrow_mut().toggle_mode();
            redraw.force_update();
        })
    };

    let on_cancel = {
        let form = form.clone();
        let redraw = redraw.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            form.borrow_mut().reset();
            redraw.force_update();
            if let Some(navigator) = navigator.as_ref() {
                navigator.back();
            }
        })
    };

    let form = form.borrow();
    let is_busy = form.is_busy();
    let is_update = form.mode() == RegisterMode::UpdateInfo;

    let password_fields = if is_update {
        html! {}
    } else {
        html! {
            <>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{i18n.t("register.password")}</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered w-full"
                        type="password"
                        autocomplete="new-password"
                        required=true
                        disabled={is_busy}
                        value={form.password.clone()}
                        oninput={on_input(Field::Password)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="confirm-password">
                        <span class="label-text">{i18n.t("register.confirm_password")}</span>
                    </label>
                    <input
                        id="confirm-password"
                        class="input input-bordered w-full"
                        type="password"
                        autocomplete="new-password"
                        required=true
                        disabled={is_busy}
                        value={form.confirm_password.clone()}
                        oninput={on_input(Field::ConfirmPassword)}
                    />
                </div>
            </>
        }
    };

    let (title, submit_label) = if is_update {
        ("register.update_title", "register.update_submit")
    } else {
        ("register.title", "register.submit")
    };

    html! {
        <div class="flex items-center justify-center w-full">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <div class="flex items-center justify-between">
                        <h2 class="card-title text-2xl">{i18n.t(title)}</h2>
                        <label class="label cursor-pointer gap-2">
                            <span class="label-text">{i18n.t("register.mode.update")}</span>
                            <input
                                type="checkbox"
                                class="toggle toggle-sm"
                                checked={is_update}
                                disabled={is_busy}
                                onchange={on_mode_toggle}
                            />
                        </label>
                    </div>
                    <ErrorAlert message={form.status().failure().cloned()} />
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{i18n.t("register.name")}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered w-full"
                            type="text"
                            autocomplete="username"
                            required=true
                            disabled={is_busy}
                            value={form.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                    </div>
                    {password_fields}
                    <CategoryPicker
                        selected={form.categories().to_vec()}
                        disabled={is_busy}
                        {on_toggle}
                    />
                    <div class="card-actions justify-end mt-6">
                        <button class="btn btn-ghost" type="button" disabled={is_busy} onclick={on_cancel}>
                            {i18n.t("register.cancel")}
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { i18n.t("register.submitting") } else { i18n.t(submit_label) }}
                        </button>
                    </div>
                    if !is_update {
                        <p class="text-sm text-center">
                            {i18n.t("register.have_account")}{" "}
                            <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                                {i18n.t("register.login_link")}
                            </Link<MainRoute>>
                        </p>
                    }
                </form>
            </div>
        </div>
    }
}
