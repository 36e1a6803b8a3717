use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image_path: String,
    pub created_by: Option<String>,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Product {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> anyhow::Result<Self> {
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("Invalid product id {}: {}", m.id, e))?;
        Ok(Product {
            id: ProductId::new(uuid),
            name: m.name,
            description: m.description,
            price_cents: m.price_cents,
            image_path: m.image_path,
            created_by: m.created_by,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
                is_deleted: m.is_deleted,
                version: m.version,
            },
        })
    }
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Product) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        price_cents: Set(aggregate.price_cents),
        image_path: Set(aggregate.image_path.clone()),
        created_by: Set(aggregate.created_by.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn).await?;
    Ok(uuid)
}

/// Products not deleted, newest first
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Product>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Product::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    fn product(name: &str, minutes_ago: i64) -> Product {
        let mut p = Product::new_for_insert(
            name.to_string(),
            "Ergonomic mouse with silent clicks".to_string(),
            1999,
            format!("{}.png", name),
            Some("admin".to_string()),
        );
        p.metadata.created_at = chrono::Utc::now() - chrono::Duration::minutes(minutes_ago);
        p.metadata.updated_at = p.metadata.created_at;
        p
    }

    #[tokio::test]
    async fn test_insert_keeps_every_column() {
        let conn = memory_connection().await;
        let p = product("mouse", 0);
        let id = insert(&conn, &p).await.unwrap();

        let stored = list_all(&conn).await.unwrap().remove(0);
        assert_eq!(stored.id.value(), id);
        assert_eq!(stored.name, "mouse");
        assert_eq!(stored.price_cents, 1999);
        assert_eq!(stored.image_path, "mouse.png");
        assert_eq!(stored.created_by.as_deref(), Some("admin"));
        assert_eq!(stored.metadata.version, 0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let conn = memory_connection().await;
        insert(&conn, &product("old", 30)).await.unwrap();
        insert(&conn, &product("new", 1)).await.unwrap();
        insert(&conn, &product("middle", 10)).await.unwrap();

        let names: Vec<String> = list_all(&conn)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["new", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_list_skips_deleted() {
        let conn = memory_connection().await;
        let mut deleted = product("gone", 0);
        deleted.metadata.is_deleted = true;
        insert(&conn, &deleted).await.unwrap();
        insert(&conn, &product("kept", 0)).await.unwrap();

        let items = list_all(&conn).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "kept");
    }
}
