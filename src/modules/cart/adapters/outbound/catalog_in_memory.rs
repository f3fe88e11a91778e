// In memory implementation of the Catalog port.
//
// Responsibilities
// - Serve stock and product records from maps seeded by the test.
// - Count lookups so tests can assert that stock is fetched on every operation.
// - Simulate an unreachable service and slow responses.

use crate::modules::cart::adapters::outbound::catalog::{Catalog, CatalogError};
use crate::modules::cart::core::product::{Product, ProductId, StockInfo};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalog {
    stocks: RwLock<HashMap<ProductId, u32>>,
    products: RwLock<HashMap<ProductId, Product>>,
    stock_lookups: AtomicUsize,
    product_lookups: AtomicUsize,
    delay_ms: AtomicU64,
    is_offline: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product, stock: u32) -> Self {
        self.stocks.get_mut().insert(product.id, stock);
        self.products.get_mut().insert(product.id, product);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: u32) {
        self.stocks.write().await.insert(product_id, amount);
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::SeqCst)
    }

    pub fn product_lookups(&self) -> usize {
        self.product_lookups.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<(), CatalogError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(CatalogError::Request("Catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Catalog for InMemoryCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        let amount = self
            .stocks
            .read()
            .await
            .get(&product_id)
            .copied()
            .ok_or(CatalogError::NotFound(product_id))?;
        Ok(StockInfo { product_id, amount })
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.product_lookups.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound(product_id))
    }
}
