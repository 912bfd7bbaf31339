use std::{net::SocketAddr, sync::Arc};

use atelier_auth_core::IdentityConfig;
use atelier_catalog_service::init_catalog_service;
use atelier_order_db::{OrderStore, PgOrderStore};
use atelier_payment_service::auth::AuthState;
use atelier_payment_service::init_payment_service;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Configuration for running the storefront backend.
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    /// Order store connection string; `None` disables local bookkeeping.
    pub database_url: Option<String>,
    /// Path to the identity-provider credentials file; `None` means every
    /// bearer token is rejected (unless `skip_auth` is set).
    pub identity_credentials_path: Option<String>,
    pub skip_auth: bool,
    /// When this receiver gets a value, the server shuts down gracefully.
    pub shutdown: tokio::sync::watch::Receiver<()>,
}

fn build_cors() -> CorsLayer {
    let Ok(origins) = std::env::var("CORS_ALLOWED_ORIGINS") else {
        // The storefront is served from arbitrary hosts during development.
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<HeaderValue>().ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub async fn run_server(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store: Option<Arc<dyn OrderStore>> = match &config.database_url {
        Some(url) => {
            let store = PgOrderStore::new(url).await?;
            tracing::info!("Order store connected");
            Some(Arc::new(store) as Arc<dyn OrderStore>)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; order bookkeeping disabled");
            None
        }
    };

    let identity = match &config.identity_credentials_path {
        Some(path) => match IdentityConfig::from_credentials_file(path) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to load identity credentials; bearer tokens will be rejected"
                );
                None
            }
        },
        None => {
            tracing::warn!(
                "IDENTITY_CREDENTIALS_PATH not set; bearer tokens will be rejected"
            );
            None
        }
    };

    if config.skip_auth {
        tracing::warn!(
            "SKIP_AUTH is enabled; every request is admitted as the development identity"
        );
    }

    let auth_state = Arc::new(AuthState {
        identity,
        skip_auth: config.skip_auth,
    });

    let payment_router = init_payment_service(store, auth_state);
    let catalog_router = init_catalog_service();
    let health_route = axum::Router::new().route(
        "/health",
        axum::routing::get(|| async { axum::http::StatusCode::OK }),
    );

    let http_router = payment_router
        .merge(catalog_router)
        .merge(health_route)
        .layer(build_cors());

    tracing::info!("Starting HTTP server at {}", config.http_addr);

    let mut http_shutdown = config.shutdown.clone();
    let http_listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(
        http_listener,
        http_router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = http_shutdown.changed().await;
        tracing::info!("Shutting down HTTP server...");
    })
    .await?;

    Ok(())
}
