use contracts::shared::validation::{check_file, Validity};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// File picker with label support.
///
/// Only the first selected file is forwarded. Validity follows `has_file`,
/// which the owner derives from the file it actually keeps.
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Receives the first selected file, or `None` for an empty selection
    on_select: Callback<Option<File>>,
    /// Whether the owner currently holds a file
    #[prop(into)]
    has_file: Signal<bool>,
    /// Receives `Some(result)` whenever `has_file` changes, `None` on unmount
    #[prop(optional)]
    on_validity: Option<Callback<Option<Validity>>>,
    /// Accept attribute, e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_accept = move || accept.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    let validity = Memo::new(move |_| check_file(has_file.get(), required));
    if let Some(report) = on_validity {
        Effect::new(move |_| report.run(Some(validity.get())));
        on_cleanup(move || report.run(None));
    }

    let handle_change = move |ev: web_sys::Event| {
        let first = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        on_select.run(first);
    };

    view! {
        <div class=move || format!("form__group {}", additional_class())>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input form__input--file"
                type="file"
                accept=input_accept
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:change=handle_change
            />
        </div>
    }
}
