use crate::containers::header::Header;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // Keep the document language in step with the selected translation
    let language = i18n.get_current_language().to_string();
    use_effect_with(language, |language| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element.set_attribute("lang", language).unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "flex",
                "justify-center",
                "p-4"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2025 AuthDesk · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
