use super::model::HttpProductGateway;
use super::state::{self, Control, ValidationGate};
use super::submit::{self, ProductGateway, SubmitOutcome, SubmitPayload, SubmitSink};
use contracts::domain::a001_product::form::{FieldKey, FieldUpdate, ProductFormData};
use contracts::shared::validation::Validity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::File;

/// ViewModel for the product creation form
#[derive(Clone)]
pub struct ProductFormViewModel {
    pub form: RwSignal<ProductFormData>,
    pub image: RwSignal<Option<File>, LocalStorage>,
    pub gate: RwSignal<ValidationGate>,
    pub is_valid: Memo<bool>,
    pub errors: RwSignal<Vec<String>>,
    pub is_loading: RwSignal<bool>,
    auth_token: Signal<Option<String>>,
    navigate: Rc<dyn Fn(&str)>,
}

impl ProductFormViewModel {
    pub fn new(auth_token: Signal<Option<String>>, navigate: Rc<dyn Fn(&str)>) -> Self {
        let gate = RwSignal::new(ValidationGate::new());
        Self {
            form: RwSignal::new(ProductFormData::default()),
            image: RwSignal::new_local(None),
            gate,
            is_valid: Memo::new(move |_| gate.with(|g| g.is_open())),
            errors: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            auth_token,
            navigate,
        }
    }

    pub fn field_value(&self, field: FieldKey) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn on_field_input(&self, field: FieldKey) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| {
            form.update(|f| f.apply(FieldUpdate::new(field, value)));
        })
    }

    /// Callback for an input's validity report; `None` means the input went away
    pub fn on_validity(&self, control: Control) -> Callback<Option<Validity>> {
        let gate = self.gate;
        Callback::new(move |validity: Option<Validity>| {
            gate.try_update(|g| g.apply(control, validity));
        })
    }

    pub fn has_image(&self) -> Signal<bool> {
        let image = self.image;
        Signal::derive(move || image.with(|slot| slot.is_some()))
    }

    /// Keeps the first selected file; an empty selection changes nothing
    pub fn on_image_select(&self) -> Callback<Option<File>> {
        let image = self.image;
        Callback::new(move |first_file: Option<File>| {
            let changed = image
                .try_update(|slot| state::select_image(slot, first_file))
                .unwrap_or(false);
            if changed {
                log::debug!("product image replaced");
            }
        })
    }

    pub fn submit_command(&self) {
        self.submit_with(HttpProductGateway);
    }

    pub fn submit_with<G>(&self, gateway: G)
    where
        G: ProductGateway<File> + 'static,
    {
        let gate_open = self.is_valid.get_untracked();
        let loading = self.is_loading.get_untracked();
        if !gate_open {
            if let Some((control, error)) = self.gate.with_untracked(|g| g.first_error()) {
                log::debug!("submit ignored, {:?} is not valid: {:?}", control, error);
            }
        }

        if submit::check_ready(gate_open, loading).is_ok() {
            // Loading must be visible before the future first runs
            self.set_loading(true);
        }

        let payload = SubmitPayload {
            form: self.form.get_untracked(),
            image: self.image.get_untracked(),
            auth_token: self.auth_token.get_untracked(),
        };
        let vm = self.clone();
        spawn_local(async move {
            match submit::submit_if_ready(gate_open, loading, &gateway, payload, &vm).await {
                Ok(SubmitOutcome::Created(created)) => {
                    log::debug!("product {} created", created.id)
                }
                Ok(SubmitOutcome::Failed(count)) => {
                    log::warn!("product creation failed with {} error(s)", count)
                }
                Err(blocked) => log::debug!("submit ignored: {:?}", blocked),
            }
        });
    }
}

impl SubmitSink for ProductFormViewModel {
    fn set_loading(&self, loading: bool) {
        // The page may already be gone after a successful navigation.
        let _ = self.is_loading.try_set(loading);
    }

    fn set_errors(&self, errors: Vec<String>) {
        let _ = self.errors.try_set(errors);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}
