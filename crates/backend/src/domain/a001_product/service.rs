use anyhow::Context;
use contracts::domain::a001_product::aggregate::{Product, ProductCreated, ProductListItem};
use contracts::domain::a001_product::price::parse_price;
use contracts::domain::a001_product::rules;
use contracts::shared::validation::check_file;
use sea_orm::DatabaseConnection;
use std::path::Path;

use super::error::ProductError;
use super::repository;
use super::upload::{ImagePart, ProductUpload};

const IMAGE_LABEL: &str = "Imagen";

/// Submission that passed every check
#[derive(Debug, Clone)]
pub struct ValidProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: ImagePart,
    pub extension: String,
}

/// Check a submission with the same rules as the browser form.
/// Every failing rule contributes one message.
pub fn validate_upload(
    upload: ProductUpload,
    max_image_bytes: usize,
) -> Result<ValidProduct, Vec<String>> {
    let mut errors: Vec<String> = rules::validate_form(&upload.form)
        .into_iter()
        .map(|(key, e)| format!("{}: {}", rules::label(key), e))
        .collect();

    let price_cents = if rules::PRICE.check(&upload.form.price).is_ok() {
        match parse_price(&upload.form.price) {
            Ok(cents) => Some(cents),
            Err(msg) => {
                errors.push(msg);
                None
            }
        }
    } else {
        None
    };

    let image = upload.image.filter(|img| !img.bytes.is_empty());
    if let Err(e) = check_file(image.is_some(), rules::IMAGE_REQUIRED) {
        errors.push(format!("{}: {}", IMAGE_LABEL, e));
    }
    if let Some(img) = &image {
        if !is_image(img.content_type.as_deref()) {
            errors.push(format!("{}: el archivo debe ser una imagen", IMAGE_LABEL));
        }
        if img.bytes.len() > max_image_bytes {
            errors.push(format!(
                "{}: el archivo supera el tamaño máximo de {}",
                IMAGE_LABEL,
                format_megabytes(max_image_bytes)
            ));
        }
    }

    match (errors.is_empty(), price_cents, image) {
        (true, Some(price_cents), Some(image)) => {
            let extension = image_extension(&image);
            Ok(ValidProduct {
                name: upload.form.name.trim().to_string(),
                description: upload.form.description.trim().to_string(),
                price_cents,
                image,
                extension,
            })
        }
        _ => Err(errors),
    }
}

fn is_image(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

fn format_megabytes(bytes: usize) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// File extension for the stored image, picked from the content type only.
/// Subtypes outside the raster allowlist are stored as `img`.
pub fn image_extension(image: &ImagePart) -> String {
    let subtype = image
        .content_type
        .as_deref()
        .and_then(|ct| ct.split(';').next())
        .and_then(|ct| ct.trim().split_once('/'))
        .map(|(_, sub)| sub.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let ext = match subtype.as_str() {
        "png" => "png",
        "jpeg" | "jpg" | "pjpeg" => "jpg",
        "gif" => "gif",
        "webp" => "webp",
        "bmp" => "bmp",
        "avif" => "avif",
        _ => "img",
    };
    ext.to_string()
}

/// Validate, store the image, insert the row
pub async fn create(
    conn: &DatabaseConnection,
    uploads_dir: &Path,
    max_image_bytes: usize,
    upload: ProductUpload,
    created_by: Option<String>,
) -> Result<ProductCreated, ProductError> {
    let valid = validate_upload(upload, max_image_bytes).map_err(ProductError::Validation)?;

    let mut product = Product::new_for_insert(
        valid.name,
        valid.description,
        valid.price_cents,
        String::new(),
        created_by,
    );
    product.image_path = format!("{}.{}", product.to_string_id(), valid.extension);

    tokio::fs::create_dir_all(uploads_dir)
        .await
        .with_context(|| format!("Failed to create {}", uploads_dir.display()))?;
    let image_file = uploads_dir.join(&product.image_path);
    tokio::fs::write(&image_file, &valid.image.bytes)
        .await
        .with_context(|| format!("Failed to write {}", image_file.display()))?;

    if let Err(e) = repository::insert(conn, &product).await {
        if let Err(rm) = tokio::fs::remove_file(&image_file).await {
            tracing::warn!("Failed to remove {}: {}", image_file.display(), rm);
        }
        return Err(ProductError::Internal(e));
    }

    tracing::info!(
        "Product {} '{}' created ({} bytes image)",
        product.to_string_id(),
        product.name,
        valid.image.bytes.len()
    );

    Ok(ProductCreated {
        id: product.to_string_id(),
    })
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<ProductListItem>> {
    let products = repository::list_all(conn).await?;
    Ok(products.iter().map(ProductListItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use axum::body::Bytes;
    use contracts::domain::a001_product::form::ProductFormData;

    const MAX: usize = 1024;

    fn png(bytes: &'static [u8]) -> ImagePart {
        ImagePart {
            file_name: Some("mouse.PNG".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: Bytes::from_static(bytes),
        }
    }

    fn upload() -> ProductUpload {
        ProductUpload {
            form: ProductFormData {
                name: "Wireless Mouse".into(),
                description: "Ergonomic mouse with silent clicks".into(),
                price: "19.99".into(),
            },
            image: Some(png(b"PNGDATA")),
        }
    }

    #[test]
    fn test_valid_upload() {
        let valid = validate_upload(upload(), MAX).unwrap();
        assert_eq!(valid.name, "Wireless Mouse");
        assert_eq!(valid.price_cents, 1999);
        assert_eq!(valid.extension, "png");
    }

    #[test]
    fn test_every_problem_is_reported() {
        let bad = ProductUpload {
            form: ProductFormData {
                name: "Mouse".into(),
                description: "".into(),
                price: "-3".into(),
            },
            image: Some(ImagePart {
                file_name: Some("notes.txt".into()),
                content_type: Some("text/plain".into()),
                bytes: Bytes::from(vec![0u8; MAX + 1]),
            }),
        };

        let errors = validate_upload(bad, MAX).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Nombre del producto: debe tener al menos 8 caracteres (tiene 5)".to_string(),
                "Descripción: el campo es obligatorio".to_string(),
                "El precio no puede ser negativo".to_string(),
                "Imagen: el archivo debe ser una imagen".to_string(),
                "Imagen: el archivo supera el tamaño máximo de 0.0 MB".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_or_empty_image() {
        let mut no_image = upload();
        no_image.image = None;
        assert_eq!(
            validate_upload(no_image, MAX).unwrap_err(),
            vec!["Imagen: debe seleccionar un archivo".to_string()]
        );

        let mut empty = upload();
        empty.image = Some(png(b""));
        assert_eq!(
            validate_upload(empty, MAX).unwrap_err(),
            vec!["Imagen: debe seleccionar un archivo".to_string()]
        );
    }

    #[test]
    fn test_empty_price_reports_once() {
        let mut u = upload();
        u.form.price = "  ".into();
        assert_eq!(
            validate_upload(u, MAX).unwrap_err(),
            vec!["Precio: el campo es obligatorio".to_string()]
        );
    }

    fn part(file_name: Option<&str>, content_type: Option<&str>) -> ImagePart {
        ImagePart {
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::new(),
        }
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension(&png(b"x")), "png");
        assert_eq!(image_extension(&part(None, Some("image/jpeg"))), "jpg");
        assert_eq!(image_extension(&part(None, Some("IMAGE/WebP; q=1"))), "webp");
        assert_eq!(image_extension(&part(Some("../../etc/passwd"), Some("image/gif"))), "gif");
        assert_eq!(image_extension(&part(Some("photo.jpg"), None)), "img");
    }

    #[test]
    fn test_image_extension_ignores_file_name() {
        let html = ImagePart {
            file_name: Some("evil.html".into()),
            content_type: Some("image/png".into()),
            bytes: Bytes::from_static(b"<script>alert(1)</script>"),
        };
        assert_eq!(image_extension(&html), "png");

        let mut u = upload();
        u.image = Some(html);
        assert_eq!(validate_upload(u, MAX).unwrap().extension, "png");
    }

    #[test]
    fn test_image_extension_rejects_scriptable_types() {
        assert_eq!(image_extension(&part(Some("logo.svg"), Some("image/svg+xml"))), "img");
        assert_eq!(image_extension(&part(Some("page.html"), Some("image/x-html"))), "img");
    }

    #[tokio::test]
    async fn test_create_stores_image_and_row() {
        let conn = memory_connection().await;
        let dir = std::env::temp_dir().join(format!("products-{}", uuid::Uuid::new_v4()));

        let created = create(&conn, &dir, MAX, upload(), Some("admin".into()))
            .await
            .unwrap();

        let stored = std::fs::read(dir.join(format!("{}.png", created.id))).unwrap();
        assert_eq!(stored, b"PNGDATA");

        let items = list_all(&conn).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, created.id);
        assert_eq!(items[0].price, "19.99");
        assert_eq!(items[0].image_url, format!("/uploads/{}.png", created.id));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_invalid_create_writes_nothing() {
        let conn = memory_connection().await;
        let dir = std::env::temp_dir().join(format!("products-{}", uuid::Uuid::new_v4()));
        let mut bad = upload();
        bad.form.description = "Ergonomic.".into();

        let err = create(&conn, &dir, MAX, bad, None).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(ref e) if e.len() == 1));
        assert!(!dir.exists());
        assert!(list_all(&conn).await.unwrap().is_empty());
    }
}
