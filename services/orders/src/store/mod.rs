use crate::model::{NewOrder, Order};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable record store for placed orders.
///
/// `insert_order` is atomic: either the full row becomes visible (with its
/// server-assigned id) or nothing does. Implementations must reject a reused
/// order number with [`StoreError::Conflict`].
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, new: NewOrder, order_number: &str) -> StoreResult<Order>;
    async fn list_orders(&self) -> StoreResult<Vec<Order>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
