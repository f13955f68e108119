use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Whether the page may only be shown to a logged-in user.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Whether a logged-in user should be sent home instead.
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Where to send the user instead of `self`, if anywhere.
    pub fn redirect_for(&self, is_authenticated: bool) -> Option<Self> {
        if self.requires_session() && !is_authenticated {
            Some(Self::Login)
        } else if self.guest_only() && is_authenticated {
            Some(Self::Home)
        } else {
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.is_authenticated());

    if let Some(target) = props.route.redirect_for(*is_authenticated) {
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    let page = match props.route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={props.route.clone()}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    tracing::debug!(?route, "switching route");
    html! { <MainRouteView {route} /> }
}
