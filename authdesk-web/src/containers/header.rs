use crate::{
    components::{
        UserDropdown, header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
    },
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let is_authenticated = use_selector(|state: &AppState| state.is_authenticated());

    let guest_links = if *is_authenticated {
        html! {}
    } else {
        html! {
            <ul class="menu menu-horizontal gap-1">
                <HeaderNavItem
                    route={MainRoute::Login}
                    label="header.login"
                    current_route={props.current_route.clone()}
                />
                <HeaderNavItem
                    route={MainRoute::Register}
                    label="header.register"
                    current_route={props.current_route.clone()}
                />
            </ul>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="flex items-center gap-2">
                {guest_links}
                <LanguageSelector />
                <UserDropdown />
            </div>
        </nav>
    }
}
