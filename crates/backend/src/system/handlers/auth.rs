use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::{config, data::db::get_connection};
use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(get_connection(), &request.username, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("Login failed for {}: {:#}", request.username, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::warn!("Invalid credentials for {}", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    let lifetime_hours = config::get()
        .map(|c| c.auth.access_token_hours)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let access_token =
        jwt::generate_access_token(&user.id, &user.username, user.is_admin, lifetime_hours)
            .map_err(|e| {
                tracing::error!("Failed to issue token: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

    tracing::info!("User {} logged in", user.username);

    Ok(Json(LoginResponse {
        access_token,
        user: user.into(),
    }))
}

/// GET /api/system/auth/me
pub async fn current_user(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(get_connection(), &claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(user.into()))
}
