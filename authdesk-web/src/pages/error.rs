use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{i18n.t("error.title")}</h1>
            <p>{i18n.t("error.message")}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {i18n.t("error.home_link")}
            </Link<MainRoute>>
        </div>
    }
}
