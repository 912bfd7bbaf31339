//! Atelier product catalog.
//!
//! Serves the storefront's fixed product list. Read-only and
//! unauthenticated; there is no product database.

use axum::{Router, routing::get};
use tracing::debug;

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod types;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product))
}

pub fn init_catalog_service() -> Router {
    debug!("Initializing catalog service");

    create_router()
}

pub use error::CatalogError;
pub use types::Product;
