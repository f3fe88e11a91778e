//! HTTP client for the storefront stock and product API.
//!
//! Resources are addressed as `{base}/stock/{id}` and `{base}/products/{id}`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::modules::cart::adapters::outbound::catalog::{Catalog, CatalogError};
use crate::modules::cart::core::product::{Product, ProductId, StockInfo};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a catalog client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Backend(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, product_id: ProductId) -> Result<T, CatalogError> {
        let url = format!("{}/{resource}/{product_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(product_id));
        }
        let response = response
            .error_for_status()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        debug!(%url, "catalog response received");
        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Response(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError> {
        let stock: StockInfo = self.get("stock", product_id).await?;
        if stock.product_id != product_id {
            return Err(CatalogError::Response(format!(
                "asked stock of product {product_id}, got product {}",
                stock.product_id
            )));
        }
        Ok(stock)
    }

    #[instrument(skip(self))]
    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let product: Product = self.get("products", product_id).await?;
        if product.id != product_id {
            return Err(CatalogError::Response(format!(
                "asked product {product_id}, got product {}",
                product.id
            )));
        }
        Ok(product)
    }
}
