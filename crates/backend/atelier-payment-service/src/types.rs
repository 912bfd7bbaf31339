use serde::{Deserialize, Serialize};

use crate::gateway::RazorpayOrder;

fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Charge amount in major currency units.
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(rename = "receiptId")]
    pub receipt_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub ok: bool,
    pub order: OrderBody,
}

/// The gateway's order object, augmented with the local record id when
/// bookkeeping succeeded.
#[derive(Debug, Serialize)]
pub struct OrderBody {
    #[serde(flatten)]
    pub gateway: RazorpayOrder,
    #[serde(rename = "localOrderId", skip_serializing_if = "Option::is_none")]
    pub local_order_id: Option<String>,
}

/// The checkout callback payload the storefront relays to us. Field names
/// are the gateway's own.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "localOrderId")]
    pub local_order_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct OrderHistoryResponse {
    pub ok: bool,
    pub orders: Vec<atelier_order_db::Order>,
}
