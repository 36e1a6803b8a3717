use leptos::prelude::*;
use std::rc::Rc;

use super::ui::Button;
use crate::shared::icons::icon;

/// Generic form frame: fields, error list and a guarded submit button.
///
/// The submit button is disabled unless `is_valid` is true and no submit is
/// loading; the same check runs again when the form is submitted with Enter.
#[component]
pub fn FormTemplate(
    on_submit: Rc<dyn Fn()>,
    #[prop(into)] errors: Signal<Vec<String>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] is_valid: Signal<bool>,
    #[prop(into)] button_text: String,
    #[prop(optional, into)] title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_valid.get_untracked() && !is_loading.get_untracked() {
            (on_submit)();
        }
    };

    view! {
        <form class="form-template" on:submit=handle_submit novalidate=true>
            {move || title.get().map(|t| view! { <h2 class="form-template__title">{t}</h2> })}

            {children()}

            {move || {
                let list = errors.get();
                (!list.is_empty()).then(|| view! {
                    <ul class="form__errors" role="alert">
                        {list.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                })
            }}

            <Button
                button_type="submit"
                disabled=Signal::derive(move || !is_valid.get())
                loading=is_loading
            >
                {icon("save")}
                <span>{move || if is_loading.get() { "Guardando...".to_string() } else { button_text.clone() }}</span>
            </Button>
        </form>
    }
}
