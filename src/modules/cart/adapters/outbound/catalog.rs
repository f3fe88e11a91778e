use crate::modules::cart::core::product::{Product, ProductId, StockInfo};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("catalog request failed: {0}")]
    Request(String),

    #[error("catalog response invalid: {0}")]
    Response(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Remote stock and product lookups. Every call goes to the source; results
/// are never cached between cart operations.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError>;
    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}
