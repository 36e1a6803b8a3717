use contracts::domain::a001_product::aggregate::{ProductCreated, ProductListItem};
use contracts::domain::a001_product::form::{FieldKey, ProductFormData};
use contracts::shared::api_error::ApiErrorResponse;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

use crate::shared::api_utils::api_url;

const PRODUCTS_PATH: &str = "/api/products";

fn with_auth(builder: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turn a failing response body into the messages shown under the form
pub fn errors_from_body(status: u16, body: &str) -> Vec<String> {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors,
        _ => vec![format!("Error HTTP {}", status)],
    }
}

fn multipart_body(form: &ProductFormData, image: Option<&File>) -> Result<FormData, String> {
    let data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for key in FieldKey::ALL {
        data.append_with_str(key.as_str(), form.get(key))
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = image {
        data.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(data)
}

/// POST /api/products (multipart)
pub async fn create_product(
    form: &ProductFormData,
    image: Option<&File>,
    auth_token: Option<&str>,
) -> Result<ProductCreated, Vec<String>> {
    let body = multipart_body(form, image).map_err(|e| vec![e])?;

    let response = with_auth(Request::post(&api_url(PRODUCTS_PATH)), auth_token)
        .body(body)
        .map_err(|e| vec![format!("No se pudo preparar la solicitud: {}", e)])?
        .send()
        .await
        .map_err(|e| vec![format!("No se pudo conectar con el servidor: {}", e)])?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| vec![format!("Respuesta ilegible: {}", e)])?;

    if !response.ok() {
        return Err(errors_from_body(status, &text));
    }

    serde_json::from_str::<ProductCreated>(&text)
        .map_err(|e| vec![format!("Respuesta ilegible: {}", e)])
}

/// GET /api/products
pub async fn fetch_products(auth_token: Option<&str>) -> Result<Vec<ProductListItem>, String> {
    let response = with_auth(Request::get(&api_url(PRODUCTS_PATH)), auth_token)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ProductListItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_from_api_body() {
        let body = r#"{"errors":["Precio inválido: abc","Debe seleccionar una imagen"]}"#;
        assert_eq!(
            errors_from_body(422, body),
            vec![
                "Precio inválido: abc".to_string(),
                "Debe seleccionar una imagen".to_string()
            ]
        );
    }

    #[test]
    fn test_errors_fall_back_to_status() {
        assert_eq!(errors_from_body(502, "Bad Gateway"), vec!["Error HTTP 502"]);
        assert_eq!(errors_from_body(500, r#"{"errors":[]}"#), vec!["Error HTTP 500"]);
    }
}
