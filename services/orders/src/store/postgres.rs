//! Postgres-backed implementation of the order store.
//!
//! # What this module is
//! Implements [`OrderStore`] using Postgres (via `sqlx`) as the durable record
//! of placed orders. The `orders` table is append-only from the service's
//! point of view: rows are inserted once and never updated or deleted.
//!
//! # Consistency / atomicity
//! `insert_order` runs inside an explicit transaction. Any failure (constraint
//! violation, connectivity loss) aborts the transaction and leaves no visible
//! row, which is what lets the placement workflow promise "no partial order is
//! ever observable". The UNIQUE constraint on `order_number` backs the
//! exactly-once guarantee for issued order numbers; a violation surfaces as
//! [`StoreError::Conflict`].
//!
//! # Operational notes
//! - Migrations run at startup via `sqlx::migrate!("./migrations")`; if they
//!   fail the service fails startup instead of serving a partial schema.
//! - `acquire_timeout` bounds how long a request waits for a pooled
//!   connection; hanging forever on DB failures is unacceptable here.
//! - Database URLs may contain credentials; avoid logging them.
use super::{OrderStore, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::{NewOrder, Order};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;

pub struct PostgresStore {
    pool: PgPool,
}

/// Row shape for the `orders` table.
///
/// Kept separate from the domain [`Order`] so schema details stay localized
/// to this module.
#[derive(Debug, Clone, FromRow)]
struct DbOrder {
    id: i64,
    order_number: String,
    sku_code: String,
    price: Decimal,
    quantity: i32,
}

impl From<DbOrder> for Order {
    fn from(row: DbOrder) -> Self {
        Order {
            id: row.id,
            order_number: row.order_number,
            sku_code: row.sku_code,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

impl PostgresStore {
    /// Connect to Postgres and run embedded migrations.
    ///
    /// # Errors
    /// - Connection, pool setup, or migration failures.
    pub async fn connect(pg: &PostgresConfig) -> StoreResult<Self> {
        let connect_options =
            PgConnectOptions::from_str(&pg.url).map_err(|err| StoreError::Unexpected(err.into()))?;
        let pool = PgPoolOptions::new()
            .max_connections(pg.max_connections)
            .acquire_timeout(Duration::from_millis(pg.acquire_timeout_ms))
            .connect_with(connect_options)
            .await
            .map_err(|err| StoreError::Unexpected(err.into()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|err| StoreError::Unexpected(err.into()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl OrderStore for PostgresStore {
    async fn insert_order(&self, new: NewOrder, order_number: &str) -> StoreResult<Order> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| StoreError::Unexpected(err.into()))?;

        let inserted = sqlx::query_as::<_, DbOrder>(
            r#"INSERT INTO orders (order_number, sku_code, price, quantity)
               VALUES ($1, $2, $3, $4)
               RETURNING id, order_number, sku_code, price, quantity"#,
        )
        .bind(order_number)
        .bind(&new.sku_code)
        .bind(new.price)
        .bind(new.quantity)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            // Dropping the transaction rolls back; no partial row survives.
            Err(err) if is_unique_violation(&err) => {
                return Err(StoreError::Conflict("order number exists".into()));
            }
            Err(err) => return Err(StoreError::Unexpected(err.into())),
        };

        tx.commit()
            .await
            .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(row.into())
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, DbOrder>(
            "SELECT id, order_number, sku_code, price, quantity FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        return db_err.code().map(|code| code == "23505").unwrap_or(false);
    }
    false
}

#[cfg(feature = "pg-tests")]
#[cfg(test)]
mod pg_tests {
    use super::*;
    use rust_decimal::Decimal;

    fn pg_config() -> PostgresConfig {
        PostgresConfig {
            url: std::env::var("SHOPLINE_ORDERS_DATABASE_URL")
                .expect("SHOPLINE_ORDERS_DATABASE_URL for pg-tests"),
            max_connections: 2,
            acquire_timeout_ms: 2000,
        }
    }

    #[tokio::test]
    async fn insert_and_list_round_trip() {
        let store = PostgresStore::connect(&pg_config()).await.expect("connect");
        let order_number = uuid::Uuid::new_v4().to_string();
        let order = store
            .insert_order(
                NewOrder {
                    sku_code: "pg_smoke".to_string(),
                    price: Decimal::from(100),
                    quantity: 1,
                },
                &order_number,
            )
            .await
            .expect("insert");
        assert!(order.id > 0);
        assert_eq!(order.order_number, order_number);

        let listed = store.list_orders().await.expect("list");
        assert!(listed.iter().any(|o| o.order_number == order_number));
    }

    #[tokio::test]
    async fn duplicate_order_number_rolls_back() {
        let store = PostgresStore::connect(&pg_config()).await.expect("connect");
        let order_number = uuid::Uuid::new_v4().to_string();
        let new = NewOrder {
            sku_code: "pg_dup".to_string(),
            price: Decimal::from(10),
            quantity: 2,
        };
        store
            .insert_order(new.clone(), &order_number)
            .await
            .expect("first insert");
        let err = store
            .insert_order(new, &order_number)
            .await
            .expect_err("duplicate");
        assert!(matches!(err, StoreError::Conflict(_)));
    }
}
