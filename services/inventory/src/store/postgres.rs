//! Postgres-backed implementation of the stock store.
//!
//! One row per SKU; `set_stock` is an upsert that replaces the absolute
//! quantity. Migrations run at startup via `sqlx::migrate!("./migrations")`.
use super::{InventoryStore, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::StockRecord;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;

pub struct PostgresStore {
    pool: PgPool,
}

#[derive(Debug, Clone, FromRow)]
struct DbStock {
    sku_code: String,
    quantity: i64,
}

impl From<DbStock> for StockRecord {
    fn from(row: DbStock) -> Self {
        StockRecord {
            sku_code: row.sku_code,
            quantity: row.quantity,
        }
    }
}

impl PostgresStore {
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
impl InventoryStore for PostgresStore {
    async fn is_in_stock(&self, sku_code: &str, quantity: i64) -> StoreResult<bool> {
        // A missing row is zero stock; COALESCE keeps the answer definite.
        let (in_stock,): (bool,) = sqlx::query_as(
            r#"SELECT COALESCE(
                   (SELECT quantity >= $2 FROM inventory WHERE sku_code = $1),
                   $2 <= 0
               )"#,
        )
        .bind(sku_code)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(in_stock)
    }

    async fn set_stock(&self, record: StockRecord) -> StoreResult<StockRecord> {
        let stored = sqlx::query_as::<_, DbStock>(
            r#"INSERT INTO inventory (sku_code, quantity)
               VALUES ($1, $2)
               ON CONFLICT (sku_code)
               DO UPDATE SET quantity = EXCLUDED.quantity, updated_at = now()
               RETURNING sku_code, quantity"#,
        )
        .bind(&record.sku_code)
        .bind(record.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(stored.into())
    }

    async fn list_stock(&self) -> StoreResult<Vec<StockRecord>> {
        let rows = sqlx::query_as::<_, DbStock>(
            "SELECT sku_code, quantity FROM inventory ORDER BY sku_code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(rows.into_iter().map(StockRecord::from).collect())
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

#[cfg(feature = "pg-tests")]
#[cfg(test)]
mod pg_tests {
    use super::*;

    fn pg_config() -> PostgresConfig {
        PostgresConfig {
            url: std::env::var("SHOPLINE_INVENTORY_DATABASE_URL")
                .expect("SHOPLINE_INVENTORY_DATABASE_URL for pg-tests"),
            max_connections: 2,
            acquire_timeout_ms: 2000,
        }
    }

    #[tokio::test]
    async fn upsert_and_check_round_trip() {
        let store = PostgresStore::connect(&pg_config()).await.expect("connect");
        store
            .set_stock(StockRecord {
                sku_code: "pg_smoke".to_string(),
                quantity: 5,
            })
            .await
            .expect("upsert");

        assert!(store.is_in_stock("pg_smoke", 3).await.expect("check"));
        assert!(!store.is_in_stock("pg_smoke", 6).await.expect("check"));

        store
            .set_stock(StockRecord {
                sku_code: "pg_smoke".to_string(),
                quantity: 1,
            })
            .await
            .expect("upsert replaces");
        assert!(!store.is_in_stock("pg_smoke", 2).await.expect("check"));
    }
}
