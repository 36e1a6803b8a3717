use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

use super::{jwt, middleware::bearer_token};

/// Claims of the authenticated caller.
///
/// Taken from the request extensions when `require_auth` already ran,
/// otherwise read from the `Authorization` header.
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<TokenClaims>() {
            return Ok(CurrentUser(claims.clone()));
        }

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let claims = jwt::validate_token(token).map_err(|_| StatusCode::UNAUTHORIZED)?;
        parts.extensions.insert(claims.clone());

        Ok(CurrentUser(claims))
    }
}
