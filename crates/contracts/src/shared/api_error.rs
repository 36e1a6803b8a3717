use serde::{Deserialize, Serialize};

/// Error body returned by every failing API call.
///
/// The list is shown to the user as-is, one line per message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: Vec<String>,
}

impl From<Vec<String>> for ApiErrorResponse {
    fn from(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let body = ApiErrorResponse::from(vec!["Precio inválido".to_string()]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": ["Precio inválido"] }));
    }
}
