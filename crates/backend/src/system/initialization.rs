use anyhow::Result;
use sea_orm::DatabaseConnection;

/// Seed the default administrator when `sys_users` is empty
pub async fn ensure_admin_user_exists(conn: &DatabaseConnection) -> Result<()> {
    use crate::system::users::{repository, service};

    let count = repository::count_users(conn).await?;

    if count == 0 {
        tracing::info!("No users found. Creating default admin user...");

        let admin_id =
            service::create(conn, "admin", "admin", Some("Administrador".to_string()), true)
                .await?;

        tracing::warn!("Default admin user created (id {})", admin_id);
        tracing::warn!("Username: admin / Password: admin. Change it before going live.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use crate::system::users::repository;

    #[tokio::test]
    async fn test_admin_is_seeded_once() {
        let conn = memory_connection().await;
        ensure_admin_user_exists(&conn).await.unwrap();
        ensure_admin_user_exists(&conn).await.unwrap();

        assert_eq!(repository::count_users(&conn).await.unwrap(), 1);
        let admin = repository::get_by_username(&conn, "admin")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.is_admin);
        assert!(admin.is_active);
    }
}
