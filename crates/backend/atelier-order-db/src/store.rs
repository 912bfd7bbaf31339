use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::DbResult;
use crate::types::{MarkPaidOutcome, NewOrder, Order, OrderStatus, PaymentRef};

/// Narrow interface over the external order store.
///
/// Absence is an expected outcome everywhere: lookups return `Option`, and
/// the `paid` transition reports a no-op rather than erroring. Callers treat
/// the store as a best-effort cache of gateway state.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Record a freshly created order, returning the stored record with its
    /// assigned id and timestamp.
    async fn insert_order(&self, order: NewOrder) -> DbResult<Order>;

    async fn get_order(&self, id: Uuid) -> DbResult<Option<Order>>;

    /// The most recently created order for the given gateway order id.
    /// Gateway order ids are expected unique, but this is not enforced.
    async fn find_latest_by_gateway_order_id(
        &self,
        gateway_order_id: &str,
    ) -> DbResult<Option<Order>>;

    /// Conditionally transition an order to `paid`, attaching the payment
    /// identifiers and stamping `paid_at`. An already-paid order is left
    /// untouched.
    async fn mark_paid(&self, id: Uuid, payment: PaymentRef) -> DbResult<MarkPaidOutcome>;

    /// The user's orders, newest first, at most `limit` of them.
    async fn orders_for_user(&self, user_id: &str, limit: i64) -> DbResult<Vec<Order>>;
}

/// In-memory `OrderStore` for tests and local development.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert_order(&self, order: NewOrder) -> DbResult<Order> {
        let record = Order {
            id: Uuid::now_v7(),
            user_id: order.user_id,
            gateway_order_id: order.gateway_order_id,
            amount: order.amount,
            currency: order.currency,
            status: OrderStatus::Created,
            payment: None,
            created_at: Utc::now(),
            paid_at: None,
        };
        self.orders.write().insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_order(&self, id: Uuid) -> DbResult<Option<Order>> {
        Ok(self.orders.read().get(&id).cloned())
    }

    async fn find_latest_by_gateway_order_id(
        &self,
        gateway_order_id: &str,
    ) -> DbResult<Option<Order>> {
        Ok(self
            .orders
            .read()
            .values()
            .filter(|o| o.gateway_order_id == gateway_order_id)
            .max_by_key(|o| (o.created_at, o.id))
            .cloned())
    }

    async fn mark_paid(&self, id: Uuid, payment: PaymentRef) -> DbResult<MarkPaidOutcome> {
        let mut orders = self.orders.write();
        let Some(order) = orders.get_mut(&id) else {
            return Ok(MarkPaidOutcome::NotFound);
        };
        if order.status == OrderStatus::Paid {
            return Ok(MarkPaidOutcome::AlreadyPaid);
        }
        order.status = OrderStatus::Paid;
        order.payment = Some(payment);
        order.paid_at = Some(Utc::now());
        Ok(MarkPaidOutcome::Updated)
    }

    async fn orders_for_user(&self, user_id: &str, limit: i64) -> DbResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .values()
            .filter(|o| o.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        orders.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        orders.truncate(limit.max(0) as usize);
        Ok(orders)
    }
}
