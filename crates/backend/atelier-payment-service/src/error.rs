use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Missing auth token")]
    MissingAuthToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Razorpay key not configured. Set RZP_KEY_ID and RZP_KEY_SECRET in the environment")]
    GatewayNotConfigured,

    #[error("Server not configured for Razorpay verification")]
    VerificationNotConfigured,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("{0}")]
    Gateway(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

// Two body shapes, both historical: order-creation failures report under
// `error`, verification and auth failures under `message`. Clients match on
// these exact fields.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PaymentError::MissingAuthToken | PaymentError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "ok": false, "message": self.to_string() }),
            ),
            PaymentError::InvalidSignature => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "message": self.to_string() }),
            ),
            PaymentError::VerificationNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "ok": false, "message": self.to_string() }),
            ),
            PaymentError::GatewayNotConfigured | PaymentError::Gateway(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "ok": false, "error": self.to_string() }),
            ),
            PaymentError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "ok": false, "error": "Internal server error" }),
            ),
        };

        tracing::error!(%status, error = %self, "Payment relay error");

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: PaymentError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn auth_errors_use_message_field() {
        let (status, body) = body_of(PaymentError::MissingAuthToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "ok": false, "message": "Missing auth token" }));

        let (status, body) = body_of(PaymentError::InvalidToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "ok": false, "message": "Invalid token" }));
    }

    #[tokio::test]
    async fn bad_signature_is_a_400_with_message() {
        let (status, body) = body_of(PaymentError::InvalidSignature).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "ok": false, "message": "Invalid signature" }));
    }

    #[tokio::test]
    async fn missing_verification_secret_is_distinct_from_bad_signature() {
        let (status, body) = body_of(PaymentError::VerificationNotConfigured).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Server not configured for Razorpay verification"
        );
    }

    #[tokio::test]
    async fn gateway_errors_use_error_field() {
        let (status, body) = body_of(PaymentError::Gateway("upstream said no".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "ok": false, "error": "upstream said no" }));
    }
}
