use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            CatalogError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}
