use axum::Json;
use axum::extract::Path;

use crate::catalog;
use crate::error::CatalogError;
use crate::types::Product;

// ---------------------------------------------------------------------------
// GET /api/products
// ---------------------------------------------------------------------------

pub async fn list_products() -> Json<&'static [Product]> {
    Json(catalog::PRODUCTS)
}

// ---------------------------------------------------------------------------
// GET /api/products/{id}
// ---------------------------------------------------------------------------

pub async fn get_product(
    Path(id): Path<u32>,
) -> Result<Json<&'static Product>, CatalogError> {
    catalog::product_by_id(id)
        .map(Json)
        .ok_or(CatalogError::ProductNotFound(id))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::create_router;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router();
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_the_whole_catalog() {
        let (status, body) = get("/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0]["id"], 1);
        assert_eq!(products[0]["currency"], "INR");
        assert!(products[0]["galleryImages"].is_array());
    }

    #[tokio::test]
    async fn fetches_a_single_product() {
        let (status, body) = get("/api/products/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 4);
        assert_eq!(body["price"], 2000.0);
    }

    #[tokio::test]
    async fn unknown_product_is_a_404() {
        let (status, body) = get("/api/products/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found: 99");
    }
}
