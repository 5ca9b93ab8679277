//! In-memory implementation of the stock store.
//!
//! Lock-guarded map from SKU to on-hand quantity, for local development and
//! tests. Not durable.
use super::{InventoryStore, StoreResult};
use crate::model::StockRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryStore {
    stock: RwLock<HashMap<String, i64>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            stock: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryStore for InMemoryStore {
    async fn is_in_stock(&self, sku_code: &str, quantity: i64) -> StoreResult<bool> {
        let stock = self.stock.read().await;
        // An unknown SKU is zero stock, not an error.
        let on_hand = stock.get(sku_code).copied().unwrap_or(0);
        Ok(on_hand >= quantity)
    }

    async fn set_stock(&self, record: StockRecord) -> StoreResult<StockRecord> {
        let mut stock = self.stock.write().await;
        stock.insert(record.sku_code.clone(), record.quantity);
        Ok(record)
    }

    async fn list_stock(&self) -> StoreResult<Vec<StockRecord>> {
        let stock = self.stock.read().await;
        let mut records: Vec<StockRecord> = stock
            .iter()
            .map(|(sku_code, quantity)| StockRecord {
                sku_code: sku_code.clone(),
                quantity: *quantity,
            })
            .collect();
        records.sort_by(|a, b| a.sku_code.cmp(&b.sku_code));
        Ok(records)
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
