use axum::body::Bytes;
use axum::extract::Multipart;
use contracts::domain::a001_product::form::{FieldKey, FieldUpdate, ProductFormData};

use super::error::ProductError;

/// Name of the multipart part carrying the image
pub const IMAGE_PART: &str = "image";

/// Image file as received from the browser
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Raw product submission, not validated yet
#[derive(Debug, Clone, Default)]
pub struct ProductUpload {
    pub form: ProductFormData,
    pub image: Option<ImagePart>,
}

/// Read every part of a product submission.
/// Text parts are routed by `FieldKey`; unknown parts are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<ProductUpload, ProductError> {
    let mut upload = ProductUpload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_PART {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;
            tracing::debug!(
                "image part: {:?} {:?} {} bytes",
                file_name,
                content_type,
                bytes.len()
            );
            upload.image = Some(ImagePart {
                file_name,
                content_type,
                bytes,
            });
            continue;
        }

        match FieldKey::parse(&name) {
            Some(key) => {
                let value = field.text().await?;
                upload.form.apply(FieldUpdate::new(key, value));
            }
            None => tracing::warn!("Skipping unknown multipart part '{}'", name),
        }
    }

    Ok(upload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};

    fn multipart_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/products")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    const BODY: &str = "--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"name\"\r\n\r\n\
Wireless Mouse\r\n\
--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"description\"\r\n\r\n\
Ergonomic mouse with silent clicks\r\n\
--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"price\"\r\n\r\n\
19.99\r\n\
--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"color\"\r\n\r\n\
black\r\n\
--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"image\"; filename=\"mouse.png\"\r\n\
Content-Type: image/png\r\n\r\n\
PNGDATA\r\n\
--XBOUNDARY--\r\n";

    #[tokio::test]
    async fn test_reads_all_parts() {
        let multipart = Multipart::from_request(multipart_request(BODY), &())
            .await
            .unwrap();
        let upload = read_upload(multipart).await.unwrap();

        assert_eq!(upload.form.name, "Wireless Mouse");
        assert_eq!(upload.form.description, "Ergonomic mouse with silent clicks");
        assert_eq!(upload.form.price, "19.99");

        let image = upload.image.unwrap();
        assert_eq!(image.file_name.as_deref(), Some("mouse.png"));
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
        assert_eq!(&image.bytes[..], b"PNGDATA");
    }

    #[tokio::test]
    async fn test_missing_image_is_none() {
        let body = "--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"name\"\r\n\r\n\
Wireless Mouse\r\n\
--XBOUNDARY--\r\n";
        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();
        let upload = read_upload(multipart).await.unwrap();

        assert_eq!(upload.form.name, "Wireless Mouse");
        assert!(upload.form.price.is_empty());
        assert!(upload.image.is_none());
    }
}
