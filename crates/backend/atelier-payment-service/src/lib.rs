//! Atelier payment relay.
//!
//! The thin server-side half of the storefront's checkout flow: creates
//! gateway orders, verifies the gateway's client-side payment confirmation
//! against the shared key secret, and best-effort mirrors order state into
//! the local store. The gateway, not the local store, is authoritative for
//! payment state.

use std::sync::Arc;

use atelier_order_db::OrderStore;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

pub mod auth;
pub mod config;
pub mod currency;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod service;
pub mod signature;
pub mod types;

use auth::AuthState;
use service::AppState;

pub fn create_router(state: Arc<AppState>, auth_state: Arc<AuthState>) -> Router {
    let create_order_governor = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("valid governor config");

    let create_order_route = Router::new()
        .route("/api/create-order", post(handlers::create_order))
        .layer(GovernorLayer::new(Arc::new(create_order_governor)));

    let other_routes = Router::new()
        .route("/api/verify-payment", post(handlers::verify_payment))
        .route("/api/orders", get(handlers::list_orders));

    create_order_route
        .merge(other_routes)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth::auth_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(64 * 1024)),
        )
        .with_state(state)
}

pub fn init_payment_service(
    store: Option<Arc<dyn OrderStore>>,
    auth_state: Arc<AuthState>,
) -> Router {
    debug!("Initializing payment relay");

    let state = Arc::new(AppState::from_env(store));

    create_router(state, auth_state)
}

pub use config::PaymentConfig;
pub use error::PaymentError;
pub use types::{
    CreateOrderRequest, CreateOrderResponse, OrderHistoryResponse, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
