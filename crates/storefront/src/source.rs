//! Product sources: where the session's product list comes from.

use async_trait::async_trait;
use thiserror::Error;

use klimatpro_catalog::{Catalog, Product, seed};
use klimatpro_core::DomainError;

use crate::types::ProductListPayload;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid product list: {0}")]
    Invalid(#[from] DomainError),
}

/// Supplies the product list once per page load.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Raw outcome of one load attempt.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;

    /// What the catalog shows: any failure becomes an empty list plus a
    /// diagnostic. No retry.
    async fn load(&self) -> Vec<Product> {
        match self.fetch().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "product list unavailable; showing an empty catalog");
                Vec::new()
            }
        }
    }
}

/// Fixed, embedded list. Never fails.
#[derive(Debug, Clone)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

impl StaticProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in showcase list.
    pub fn showcase() -> Self {
        Self::new(seed::showcase_products())
    }
}

impl Default for StaticProductSource {
    fn default() -> Self {
        Self::showcase()
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

/// One GET against the product API. No timeout, no retry, no caching.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Api(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let payload: ProductListPayload = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let catalog = Catalog::from_products(payload.into_products())?;
        tracing::info!(url = %self.url, products = catalog.len(), "product list fetched");
        Ok(catalog.into_products())
    }
}
