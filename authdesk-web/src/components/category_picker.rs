use i18nrs::yew::use_translation;
use shared::models::Category;
use strum::IntoEnumIterator;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    pub selected: Vec<Category>,
    pub disabled: bool,
    pub on_toggle: Callback<Category>,
}

/// Checkbox list of every category.
#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <fieldset class="fieldset grid grid-cols-2 gap-2">
            <legend class="fieldset-legend">{i18n.t("register.categories")}</legend>
            {
                for Category::iter().map(|category| {
                    let on_toggle = props.on_toggle.clone();
                    html! {
                        <label class="label cursor-pointer gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                value={category.as_str()}
                                checked={props.selected.contains(&category)}
                                disabled={props.disabled}
                                onchange={move |_| on_toggle.emit(category)}
                            />
                            <span>{i18n.t(category.i18n_key())}</span>
                        </label>
                    }
                })
            }
        </fieldset>
    }
}
