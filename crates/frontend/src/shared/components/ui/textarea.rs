use contracts::shared::validation::{ValidatorConfig, Validity};
use leptos::prelude::*;

/// Multiline text input with label support and validity reporting
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    validators: ValidatorConfig,
    /// Receives `Some(result)` whenever the value changes, `None` on unmount
    #[prop(optional)]
    on_validity: Option<Callback<Option<Validity>>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(4);

    let validity = Memo::new(move |_| validators.check(&value.get(), required));
    if let Some(report) = on_validity {
        Effect::new(move |_| report.run(Some(validity.get())));
        on_cleanup(move || report.run(None));
    }
    let invalid_class = move || match validity.get() {
        Ok(()) => "",
        Err(_) => "form__textarea--invalid",
    };

    view! {
        <div class=move || format!("form__group {}", additional_class())>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || format!("form__textarea {}", invalid_class())
                placeholder=textarea_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
