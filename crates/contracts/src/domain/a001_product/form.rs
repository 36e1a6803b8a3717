//! Product form state.
//!
//! The form keeps one string per field. Every edit is a [`FieldUpdate`]
//! message applied by [`ProductFormData::apply`], which replaces the
//! addressed field and leaves the others alone.

use serde::{Deserialize, Serialize};

/// Text fields of the product form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Description,
    Price,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Description, FieldKey::Price];

    /// Multipart part name and form key
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Description => "description",
            FieldKey::Price => "price",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        FieldKey::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field: FieldKey,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: FieldKey, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormData {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductFormData {
    pub fn get(&self, field: FieldKey) -> &str {
        match field {
            FieldKey::Name => &self.name,
            FieldKey::Description => &self.description,
            FieldKey::Price => &self.price,
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        let slot = match update.field {
            FieldKey::Name => &mut self.name,
            FieldKey::Description => &mut self.description,
            FieldKey::Price => &mut self.price,
        };
        *slot = update.value;
    }

    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_per_key() {
        let mut form = ProductFormData::default();
        let edits = [
            FieldUpdate::new(FieldKey::Name, "W"),
            FieldUpdate::new(FieldKey::Price, "1"),
            FieldUpdate::new(FieldKey::Name, "Wireless"),
            FieldUpdate::new(FieldKey::Price, "19.9"),
            FieldUpdate::new(FieldKey::Name, "Wireless Mouse"),
            FieldUpdate::new(FieldKey::Price, "19.99"),
        ];
        for edit in edits {
            form.apply(edit);
        }

        assert_eq!(form.name, "Wireless Mouse");
        assert_eq!(form.price, "19.99");
        assert_eq!(form.description, "");
    }

    #[test]
    fn test_update_leaves_other_keys_untouched() {
        let form = ProductFormData {
            name: "Wireless Mouse".into(),
            description: "Ergonomic, two buttons and a wheel".into(),
            price: "19.99".into(),
        };
        let next = form.clone().with(FieldUpdate::new(FieldKey::Description, ""));

        assert_eq!(next.name, form.name);
        assert_eq!(next.price, form.price);
        assert_eq!(next.get(FieldKey::Description), "");
    }

    #[test]
    fn test_field_key_round_trips_through_str() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(FieldKey::parse("image"), None);
    }
}
