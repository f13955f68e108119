use i18nrs::yew::use_translation;
use shared::forms::FailureMessage;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: Option<FailureMessage>,
}

/// Banner showing the failure of the last submission, if any.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    html! {
        <div role="alert" class="alert alert-error">
            <span>{message.resolve(|key| i18n.t(key))}</span>
        </div>
    }
}
