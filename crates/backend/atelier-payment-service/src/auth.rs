use std::sync::Arc;

use atelier_auth_core::{Claims, IdentityConfig};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::error::PaymentError;

/// Shared state for the bearer-token auth gate.
pub struct AuthState {
    pub identity: Option<IdentityConfig>,
    /// Development bypass: admit every request as the fixed dev identity.
    pub skip_auth: bool,
}

/// Validates `Authorization: Bearer <token>` against the identity provider
/// and attaches the decoded identity to the request. Nothing reaches the
/// handlers behind this gate without one.
pub async fn auth_middleware(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Response {
    if state.skip_auth {
        debug!("Auth bypass active; assigning development identity");
        req.extensions_mut().insert(Claims::development());
        return next.run(req).await;
    }

    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));
    let Some(token) = token else {
        return PaymentError::MissingAuthToken.into_response();
    };

    let Some(identity) = &state.identity else {
        warn!("No identity provider configured; rejecting token");
        return PaymentError::InvalidToken.into_response();
    };

    match identity.verify_id_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => {
            warn!(error = %e, "Token verification failed");
            PaymentError::InvalidToken.into_response()
        }
    }
}
