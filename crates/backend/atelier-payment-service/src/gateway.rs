//! Razorpay Orders API client.
//!
//! Order creation is the only call the relay makes; payment confirmation
//! arrives through the client-side callback and is verified locally
//! (`signature` module), never by calling the gateway back.

use std::sync::Arc;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;
use crate::error::PaymentError;

#[derive(Clone)]
pub struct RazorpayClient {
    http: Client,
    config: Arc<PaymentConfig>,
}

/// Wire request for order creation.
#[derive(Debug, Serialize)]
pub struct CreateOrderPayload {
    /// Amount in the smallest currency unit (paise for INR).
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    /// 1 = capture the payment automatically on authorization.
    pub payment_capture: u8,
}

/// A gateway order as returned by the Orders API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
struct RazorpayApiError {
    error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetail {
    #[serde(default)]
    code: String,
    description: String,
}

impl RazorpayClient {
    pub fn new(config: Arc<PaymentConfig>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Create an order at the gateway. Fails closed when credentials are
    /// missing, with an error distinct from an upstream failure.
    pub async fn create_order(
        &self,
        payload: &CreateOrderPayload,
    ) -> Result<RazorpayOrder, PaymentError> {
        if !self.is_configured() {
            return Err(PaymentError::GatewayNotConfigured);
        }

        let url = format!(
            "{}/orders",
            self.config.api_base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(payload)
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(format!("Razorpay request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Gateway(format!("Razorpay response unreadable: {e}")))?;

        tracing::debug!(status = %status, "Razorpay create_order response");

        if status.is_success() {
            let order: RazorpayOrder = serde_json::from_str(&body).map_err(|e| {
                PaymentError::Gateway(format!("Unexpected Razorpay response: {e}"))
            })?;
            tracing::info!(
                order_id = %order.id,
                amount = order.amount,
                currency = %order.currency,
                "Razorpay order created"
            );
            Ok(order)
        } else {
            let description = match serde_json::from_str::<RazorpayApiError>(&body) {
                Ok(api_error) => {
                    tracing::error!(
                        code = %api_error.error.code,
                        description = %api_error.error.description,
                        "Razorpay order creation failed"
                    );
                    api_error.error.description
                }
                Err(_) => {
                    tracing::error!(status = %status, "Razorpay order creation failed");
                    format!("Razorpay returned {status}")
                }
            };
            Err(PaymentError::Gateway(description))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE_URL;

    fn client(key_id: &str, key_secret: &str) -> RazorpayClient {
        RazorpayClient::new(Arc::new(PaymentConfig {
            key_id: key_id.to_string(),
            key_secret: secrecy::SecretString::from(key_secret.to_string()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }))
    }

    #[test]
    fn configured_requires_both_credentials() {
        assert!(client("rzp_test_123", "secret").is_configured());
        assert!(!client("", "").is_configured());
        assert!(!client("rzp_test_123", "").is_configured());
    }

    #[tokio::test]
    async fn unconfigured_client_fails_closed_without_network() {
        let err = client("", "")
            .create_order(&CreateOrderPayload {
                amount: 2000,
                currency: "INR".to_string(),
                receipt: "rcpt_test".to_string(),
                payment_capture: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::GatewayNotConfigured));
    }

    #[test]
    fn payload_serializes_gateway_fields() {
        let payload = CreateOrderPayload {
            amount: 2000,
            currency: "INR".to_string(),
            receipt: "rcpt_abc".to_string(),
            payment_capture: 1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "amount": 2000,
                "currency": "INR",
                "receipt": "rcpt_abc",
                "payment_capture": 1,
            })
        );
    }

    #[test]
    fn order_deserializes_from_gateway_json() {
        let raw = r#"{
            "id": "order_9A33XWu170gUtm",
            "entity": "order",
            "amount": 2000,
            "amount_paid": 0,
            "amount_due": 2000,
            "currency": "INR",
            "receipt": "rcpt_abc",
            "offer_id": null,
            "status": "created",
            "attempts": 0,
            "notes": [],
            "created_at": 1566986570
        }"#;

        let order: RazorpayOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, "order_9A33XWu170gUtm");
        assert_eq!(order.amount, 2000);
        assert_eq!(order.status, "created");
        assert_eq!(order.receipt.as_deref(), Some("rcpt_abc"));
    }
}
