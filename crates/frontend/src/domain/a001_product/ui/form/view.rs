use super::state::Control;
use super::view_model::ProductFormViewModel;
use crate::shared::components::ui::{FileInput, Input, Textarea};
use crate::shared::components::FormTemplate;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_product::form::FieldKey;
use contracts::domain::a001_product::rules;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

#[component]
pub fn ProductForm() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let auth_token = Signal::derive(move || auth_state.get().access_token);

    let navigate = use_navigate();
    let navigate: Rc<dyn Fn(&str)> = Rc::new(move |path| navigate(path, Default::default()));

    let vm = ProductFormViewModel::new(auth_token, navigate);
    let is_loading = vm.is_loading;
    let busy = Signal::derive(move || is_loading.get());
    let on_submit: Rc<dyn Fn()> = {
        let vm = vm.clone();
        Rc::new(move || vm.submit_command())
    };

    // Children must be Send, so they only capture signals and callbacks
    let name_value = vm.field_value(FieldKey::Name);
    let name_input = vm.on_field_input(FieldKey::Name);
    let name_validity = vm.on_validity(Control::Name);
    let description_value = vm.field_value(FieldKey::Description);
    let description_input = vm.on_field_input(FieldKey::Description);
    let description_validity = vm.on_validity(Control::Description);
    let price_value = vm.field_value(FieldKey::Price);
    let price_input = vm.on_field_input(FieldKey::Price);
    let price_validity = vm.on_validity(Control::Price);
    let image_select = vm.on_image_select();
    let has_image = vm.has_image();
    let image_validity = vm.on_validity(Control::Image);

    view! {
        <section class="product-form">
            <FormTemplate
                on_submit=on_submit
                errors=vm.errors
                is_loading=vm.is_loading
                is_valid=vm.is_valid
                button_text="Guardar"
                title="Nuevo producto"
            >
                <Input
                    id="product-name"
                    label="Nombre del producto"
                    placeholder="Nombre del producto"
                    input_type="text"
                    value=name_value
                    on_input=name_input
                    validators=rules::NAME.validators
                    required=rules::NAME.required
                    on_validity=name_validity
                    disabled=busy
                />

                <Textarea
                    id="product-description"
                    label="Descripción"
                    placeholder="Descripción"
                    value=description_value
                    on_input=description_input
                    validators=rules::DESCRIPTION.validators
                    required=rules::DESCRIPTION.required
                    on_validity=description_validity
                    disabled=busy
                />

                <Input
                    id="product-price"
                    label="Precio"
                    placeholder="Precio"
                    input_type="number"
                    value=price_value
                    on_input=price_input
                    validators=rules::PRICE.validators
                    required=rules::PRICE.required
                    on_validity=price_validity
                    disabled=busy
                />

                <FileInput
                    id="product-image"
                    label="Imagen"
                    accept=rules::IMAGE_ACCEPT
                    on_select=image_select
                    has_file=has_image
                    required=rules::IMAGE_REQUIRED
                    on_validity=image_validity
                    disabled=busy
                />
            </FormTemplate>
        </section>
    }
}
