use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    Row,
    migrate::MigrateDatabase,
    postgres::{PgPool, PgPoolOptions, PgRow},
};
use uuid::Uuid;

use crate::error::DbResult;
use crate::store::OrderStore;
use crate::types::{MarkPaidOutcome, NewOrder, Order, OrderStatus, PaymentRef};

const ORDER_COLUMNS: &str = "id, user_id, gateway_order_id, amount, currency, status, \
     payment_gateway_order_id, payment_gateway_payment_id, created_at, paid_at";

/// Postgres-backed `OrderStore`.
#[derive(Debug)]
pub struct PgOrderStore {
    pub pool: PgPool,
}

impl PgOrderStore {
    pub async fn new(database_url: &str) -> DbResult<Self> {
        if !sqlx::Postgres::database_exists(database_url).await? {
            sqlx::Postgres::create_database(database_url).await?;
        }

        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(PgOrderStore { pool })
    }

    async fn run_migrations(pool: &PgPool) -> DbResult<()> {
        tracing::debug!("Running order store migrations");
        let migrator = sqlx::migrate!("./src/migrations");
        migrator.run(pool).await?;
        Ok(())
    }
}

impl<'r> sqlx::FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let status_raw: String = row.try_get("status")?;
        let status: OrderStatus =
            status_raw
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(e),
                })?;

        let payment_order_id: Option<String> = row.try_get("payment_gateway_order_id")?;
        let payment_id: Option<String> = row.try_get("payment_gateway_payment_id")?;
        let payment = match (payment_order_id, payment_id) {
            (Some(gateway_order_id), Some(gateway_payment_id)) => Some(PaymentRef {
                gateway_order_id,
                gateway_payment_id,
            }),
            _ => None,
        };

        Ok(Order {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            gateway_order_id: row.try_get("gateway_order_id")?,
            amount: row.try_get("amount")?,
            currency: row.try_get("currency")?,
            status,
            payment,
            created_at: row.try_get("created_at")?,
            paid_at: row.try_get("paid_at")?,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert_order(&self, order: NewOrder) -> DbResult<Order> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let inserted = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (id, user_id, gateway_order_id, amount, currency, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&order.user_id)
        .bind(&order.gateway_order_id)
        .bind(order.amount)
        .bind(&order.currency)
        .bind(OrderStatus::Created.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn get_order(&self, id: Uuid) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn find_latest_by_gateway_order_id(
        &self,
        gateway_order_id: &str,
    ) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS} FROM orders
            WHERE gateway_order_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        ))
        .bind(gateway_order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn mark_paid(&self, id: Uuid, payment: PaymentRef) -> DbResult<MarkPaidOutcome> {
        // Conditional transition: an already-paid order is never overwritten,
        // so concurrent confirmations converge on a single paid record.
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = $2, payment_gateway_order_id = $3, payment_gateway_payment_id = $4, paid_at = $5
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(OrderStatus::Paid.as_str())
        .bind(&payment.gateway_order_id)
        .bind(&payment.gateway_payment_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(MarkPaidOutcome::Updated);
        }

        let exists: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT created_at FROM orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(match exists {
            Some(_) => MarkPaidOutcome::AlreadyPaid,
            None => MarkPaidOutcome::NotFound,
        })
    }

    async fn orders_for_user(&self, user_id: &str, limit: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS} FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }
}
