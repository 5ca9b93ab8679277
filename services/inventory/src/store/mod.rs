use crate::model::StockRecord;
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

/// Stock level store.
///
/// `is_in_stock` answers whether the on-hand quantity for a SKU covers the
/// requested amount. A SKU with no row counts as zero stock, not an error;
/// the availability question has a definite answer either way.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn is_in_stock(&self, sku_code: &str, quantity: i64) -> StoreResult<bool>;
    async fn set_stock(&self, record: StockRecord) -> StoreResult<StockRecord>;
    async fn list_stock(&self) -> StoreResult<Vec<StockRecord>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
