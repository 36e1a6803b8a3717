use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ApiErrorResponse;

/// Failure of a product request, rendered as `ApiErrorResponse`
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("unauthorized")]
    Unauthorized,
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ProductError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProductError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProductError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProductError::Multipart(_) => StatusCode::BAD_REQUEST,
            ProductError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Messages shown to the user
    pub fn messages(&self) -> Vec<String> {
        match self {
            ProductError::Validation(errors) => errors.clone(),
            ProductError::Unauthorized => {
                vec!["Sesión no válida, inicie sesión de nuevo".to_string()]
            }
            ProductError::Multipart(e) => vec![format!("Formulario inválido: {}", e)],
            ProductError::Internal(_) => {
                vec!["Error interno del servidor, inténtelo más tarde".to_string()]
            }
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ProductError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        ProductError::Multipart(e.body_text())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        if let ProductError::Internal(e) = &self {
            tracing::error!("Product request failed: {:#}", e);
        }
        let status = self.status();
        (status, Json(ApiErrorResponse::from(self.messages()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProductError::Validation(vec![]).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ProductError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ProductError::Multipart("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::Internal(anyhow::anyhow!("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_messages_pass_through() {
        let err = ProductError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.messages(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = ProductError::Internal(anyhow::anyhow!("/var/secret/path"));
        assert!(err.messages().iter().all(|m| !m.contains("/var/secret")));
    }

    #[test]
    fn test_response_status() {
        let response = ProductError::Validation(vec!["x".into()]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
