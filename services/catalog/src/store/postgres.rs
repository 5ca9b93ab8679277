//! Postgres-backed implementation of the product store.
use super::{ProductStore, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

pub struct PostgresStore {
    pool: PgPool,
}

#[derive(Debug, Clone, FromRow)]
struct DbProduct {
    id: String,
    name: String,
    description: String,
    price: Decimal,
}

impl From<DbProduct> for Product {
    fn from(row: DbProduct) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
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
impl ProductStore for PostgresStore {
    async fn insert_product(&self, new: NewProduct) -> StoreResult<Product> {
        let id = Uuid::new_v4().to_string();
        let inserted = sqlx::query_as::<_, DbProduct>(
            r#"INSERT INTO products (id, name, description, price)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, description, price"#,
        )
        .bind(&id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(inserted.into())
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, DbProduct>(
            "SELECT id, name, description, price FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StoreError::Unexpected(err.into()))?;
        Ok(rows.into_iter().map(Product::from).collect())
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
            url: std::env::var("SHOPLINE_CATALOG_DATABASE_URL")
                .expect("SHOPLINE_CATALOG_DATABASE_URL for pg-tests"),
            max_connections: 2,
            acquire_timeout_ms: 2000,
        }
    }

    #[tokio::test]
    async fn insert_and_list_round_trip() {
        let store = PostgresStore::connect(&pg_config()).await.expect("connect");
        let product = store
            .insert_product(NewProduct {
                name: "pg_smoke".to_string(),
                description: "integration probe".to_string(),
                price: Decimal::from(10),
            })
            .await
            .expect("insert");
        assert!(!product.id.is_empty());

        let listed = store.list_products().await.expect("list");
        assert!(listed.iter().any(|p| p.id == product.id));
    }
}
