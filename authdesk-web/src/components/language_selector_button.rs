use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<String>,
}

#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let info = &props.info;
    let onclick = {
        let code = info.code.to_string();
        let on_click = props.on_click.clone();
        move |event: MouseEvent| {
            event.prevent_default();
            on_click.emit(code.clone());
        }
    };

    html! {
        <li>
            <a
                class={classes!(props.is_active.then_some("menu-active"))}
                lang={info.code}
                aria-current={props.is_active.then_some("true")}
                {onclick}>
                <span>{info.flag}</span>
                <span>{info.native_name}</span>
            </a>
        </li>
    }
}
