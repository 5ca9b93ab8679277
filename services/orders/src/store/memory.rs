//! In-memory implementation of the order store.
//!
//! # Purpose
//! Implements [`OrderStore`] with a lock-guarded vector for local development
//! and tests. Not durable: all state is lost on restart. Sequential ids are
//! assigned from an in-process counter, mirroring the serial column the
//! Postgres backend relies on.
use super::{OrderStore, StoreError, StoreResult};
use crate::model::{NewOrder, Order};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryStore {
    orders: Arc<RwLock<Vec<Order>>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn insert_order(&self, new: NewOrder, order_number: &str) -> StoreResult<Order> {
        let mut orders = self.orders.write().await;
        // Same uniqueness guarantee the Postgres backend gets from its
        // UNIQUE constraint on order_number.
        if orders.iter().any(|order| order.order_number == order_number) {
            return Err(StoreError::Conflict("order number exists".into()));
        }
        let order = Order {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            order_number: order_number.to_string(),
            sku_code: new.sku_code,
            price: new.price,
            quantity: new.quantity,
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
