use anyhow::Result;
use chrono::Utc;
use contracts::system::auth::UserInfo;
use sea_orm::DatabaseConnection;

use super::repository::{self, SysUser};
use crate::system::auth::password;

/// Create an active user and return its id
pub async fn create(
    conn: &DatabaseConnection,
    username: &str,
    password: &str,
    full_name: Option<String>,
    is_admin: bool,
) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(conn, username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    let password_hash = password::hash_password(password)?;

    let user = SysUser {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        full_name,
        is_active: true,
        is_admin,
        created_at: Utc::now().to_rfc3339(),
        last_login_at: None,
    };

    repository::create_with_password(conn, &user, &password_hash).await?;

    Ok(user.id)
}

/// Check a username/password pair. `Ok(None)` means the credentials are wrong.
pub async fn verify_credentials(
    conn: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<SysUser>> {
    let user = match repository::get_by_username(conn, username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        return Ok(None);
    }

    let password_hash = repository::get_password_hash(conn, &user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(conn, &user.id).await {
        tracing::warn!("Failed to update last login for {}: {}", user.username, e);
    }

    Ok(Some(user))
}

pub async fn get_by_id(conn: &DatabaseConnection, id: &str) -> Result<Option<SysUser>> {
    repository::get_by_id(conn, id).await
}

impl From<SysUser> for UserInfo {
    fn from(user: SysUser) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    #[tokio::test]
    async fn test_verify_credentials() {
        let conn = memory_connection().await;
        let id = create(&conn, "admin", "admin", Some("Administrador".into()), true)
            .await
            .unwrap();

        let user = verify_credentials(&conn, "admin", "admin")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id, id);
        assert!(user.is_admin);

        assert!(verify_credentials(&conn, "admin", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(verify_credentials(&conn, "nobody", "admin")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_successful_login_records_last_login() {
        let conn = memory_connection().await;
        let id = create(&conn, "ana", "clave-segura", None, false).await.unwrap();
        assert!(get_by_id(&conn, &id).await.unwrap().unwrap().last_login_at.is_none());

        verify_credentials(&conn, "ana", "clave-segura").await.unwrap();

        assert!(get_by_id(&conn, &id).await.unwrap().unwrap().last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let conn = memory_connection().await;
        create(&conn, "ana", "x", None, false).await.unwrap();
        assert!(create(&conn, "ana", "y", None, false).await.is_err());
        assert!(create(&conn, "   ", "y", None, false).await.is_err());
    }
}
