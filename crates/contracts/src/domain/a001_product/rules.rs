//! Validation rules of the product form, shared by the browser and the server.

use super::form::{FieldKey, ProductFormData};
use crate::shared::validation::{ValidationError, ValidatorConfig, Validity};

/// Validators plus the `required` flag of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub validators: ValidatorConfig,
    pub required: bool,
}

impl FieldRules {
    pub fn check(&self, value: &str) -> Validity {
        self.validators.check(value, self.required)
    }
}

pub const NAME: FieldRules = FieldRules {
    validators: ValidatorConfig::non_empty().with_min_length(8),
    required: true,
};

pub const DESCRIPTION: FieldRules = FieldRules {
    validators: ValidatorConfig::non_empty().with_min_length(20),
    required: true,
};

pub const PRICE: FieldRules = FieldRules {
    validators: ValidatorConfig::non_empty(),
    required: true,
};

pub const IMAGE_REQUIRED: bool = true;

/// `accept` attribute of the image input
pub const IMAGE_ACCEPT: &str = "image/*";

pub fn for_field(field: FieldKey) -> FieldRules {
    match field {
        FieldKey::Name => NAME,
        FieldKey::Description => DESCRIPTION,
        FieldKey::Price => PRICE,
    }
}

/// Human readable label used in error messages
pub fn label(field: FieldKey) -> &'static str {
    match field {
        FieldKey::Name => "Nombre del producto",
        FieldKey::Description => "Descripción",
        FieldKey::Price => "Precio",
    }
}

/// Every failing text field, in form order
pub fn validate_form(form: &ProductFormData) -> Vec<(FieldKey, ValidationError)> {
    FieldKey::ALL
        .into_iter()
        .filter_map(|key| for_field(key).check(form.get(key)).err().map(|e| (key, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductFormData {
        ProductFormData {
            name: "Wireless Mouse".into(),
            description: "Ergonomic mouse with silent clicks".into(),
            price: "19.99".into(),
        }
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(validate_form(&filled()).is_empty());
    }

    #[test]
    fn test_short_description_fails() {
        let mut form = filled();
        form.description = "Ergonomic.".into();
        assert_eq!(
            validate_form(&form),
            vec![(
                FieldKey::Description,
                ValidationError::TooShort { min: 20, actual: 10 }
            )]
        );
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_form(&ProductFormData::default());
        let keys: Vec<_> = errors.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, FieldKey::ALL.to_vec());
        assert!(errors.iter().all(|(_, e)| *e == ValidationError::Empty));
    }
}
