use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A product offered in the shop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price_cents: i64,
    /// Path of the stored image relative to the uploads root
    pub image_path: String,
    pub created_by: Option<String>,
    pub metadata: EntityMetadata,
}

impl Product {
    pub fn new_for_insert(
        name: String,
        description: String,
        price_cents: i64,
        image_path: String,
        created_by: Option<String>,
    ) -> Self {
        Self {
            id: ProductId::new_v4(),
            name,
            description,
            price_cents,
            image_path,
            created_by,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Response of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: String,
}

/// Row of the product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Product> for ProductListItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.to_string_id(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: super::price::format_price(p.price_cents),
            image_url: format!("/uploads/{}", p.image_path),
            created_at: p.metadata.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_from_product() {
        let product = Product::new_for_insert(
            "Wireless Mouse".into(),
            "Ergonomic mouse with silent clicks".into(),
            1999,
            "abc.png".into(),
            None,
        );
        let item = ProductListItem::from(&product);
        assert_eq!(item.id, product.to_string_id());
        assert_eq!(item.price, "19.99");
        assert_eq!(item.image_url, "/uploads/abc.png");
        assert_eq!(item.created_at, product.metadata.created_at);
    }

    #[test]
    fn test_product_id_from_string() {
        let id = ProductId::new_v4();
        assert_eq!(ProductId::from_string(&id.as_string()), Ok(id));
        assert!(ProductId::from_string("not-a-uuid").is_err());
    }
}
