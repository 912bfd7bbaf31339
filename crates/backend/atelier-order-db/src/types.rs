use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order lifecycle state. The only transition this subsystem performs is
/// `created`/`pending` → `paid`; there are no failure or refund states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(String);

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(OrderStatus::Created),
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// Gateway identifiers recorded on an order once its payment is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRef {
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
}

/// The local order record. Best-effort bookkeeping only: the payment gateway
/// remains the source of truth for payment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    /// Purchaser identity, or `None` for anonymous/local-only orders.
    pub user_id: Option<String>,
    pub gateway_order_id: String,
    /// Charge amount in major currency units.
    pub amount: f64,
    pub currency: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRef>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Fields the caller supplies when recording a freshly created order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<String>,
    pub gateway_order_id: String,
    pub amount: f64,
    pub currency: String,
}

/// Result of the conditional `paid` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPaidOutcome {
    /// The order transitioned to `paid`.
    Updated,
    /// The order was already `paid`; nothing changed. Treated as success.
    AlreadyPaid,
    /// No order with that id exists.
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [OrderStatus::Created, OrderStatus::Pending, OrderStatus::Paid] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_serializes_camel_case() {
        let order = Order {
            id: Uuid::nil(),
            user_id: Some("user-1".to_string()),
            gateway_order_id: "order_abc".to_string(),
            amount: 20.0,
            currency: "INR".to_string(),
            status: OrderStatus::Created,
            payment: None,
            created_at: Utc::now(),
            paid_at: None,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["gatewayOrderId"], "order_abc");
        assert_eq!(value["status"], "created");
        assert!(value.get("paidAt").is_none());
    }
}
