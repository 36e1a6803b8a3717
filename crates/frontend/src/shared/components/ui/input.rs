use contracts::shared::validation::{ValidatorConfig, Validity};
use leptos::prelude::*;

/// Input component with label support and validity reporting
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "password", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validator options applied to the current value
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
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    let validity = Memo::new(move |_| validators.check(&value.get(), required));
    if let Some(report) = on_validity {
        Effect::new(move |_| report.run(Some(validity.get())));
        on_cleanup(move || report.run(None));
    }
    let invalid_class = move || match validity.get() {
        Ok(()) => "",
        Err(_) => "form__input--invalid",
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
                class=move || format!("form__input {}", invalid_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
