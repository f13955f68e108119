use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    /// Translation key of the link label.
    pub label: &'static str,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "btn-sm", active_route_class)}>
              {i18n.t(props.label)}
          </Link<MainRoute>>
      </li>
    }
}
