use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::aggregate::{ProductCreated, ProductListItem};

use crate::domain::a001_product::{self, error::ProductError, upload};
use crate::shared::{config, data::db::get_connection};
use crate::system::auth::extractor::CurrentUser;

/// POST /api/products
pub async fn create(
    user: Option<CurrentUser>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ProductCreated>), ProductError> {
    let CurrentUser(claims) = user.ok_or(ProductError::Unauthorized)?;
    let config = config::get()?;
    let product = upload::read_upload(multipart).await?;

    let created = a001_product::service::create(
        get_connection(),
        &config::get_uploads_dir(config),
        config.uploads.max_image_bytes,
        product,
        Some(claims.username),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/products
pub async fn list_all(
    user: Option<CurrentUser>,
) -> Result<Json<Vec<ProductListItem>>, ProductError> {
    user.ok_or(ProductError::Unauthorized)?;
    let items = a001_product::service::list_all(get_connection()).await?;
    Ok(Json(items))
}
