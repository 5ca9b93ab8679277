//! In-memory implementation of the product store.
use super::{ProductStore, StoreResult};
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn insert_product(&self, new: NewProduct) -> StoreResult<Product> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            price: new.price,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
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
