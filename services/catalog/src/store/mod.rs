use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Product catalog store.
///
/// `insert_product` assigns the product id; callers never choose one.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert_product(&self, new: NewProduct) -> StoreResult<Product>;
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
