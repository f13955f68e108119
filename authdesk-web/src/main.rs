mod api;
mod app;
mod components;
mod config;
mod containers;
mod language;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod routes_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{resolve_language, supported_languages};
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

/// Language preferred by the browser, if one of ours.
fn browser_language() -> Option<&'static str> {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| resolve_language(&tag))
}

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let default_language = browser_language()
        .map_or_else(|| FrontendConfig::new().default_language, str::to_string);
    let config = I18nProviderConfig {
        translations,
        default_language,
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger setup failed: {err}").into());
    }

    log::info!("starting AuthDesk");

    Renderer::<InternationalApp>::new().render();
}
