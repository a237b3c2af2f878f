//! HTTP product source

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{FetchError, Result, StorefrontError};
use crate::source::ProductSource;
use crate::types::Product;

/// Fetches `GET {base_url}/products`
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: String,
}

impl HttpProductSource {
    /// Create a source for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(StorefrontError::InvalidInput(
                "API base URL cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(FetchError::from)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a source with a preconfigured client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the products endpoint
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = self.products_url();
        tracing::debug!(url = %url, "fetching products");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from)?
            .error_for_status()
            .map_err(FetchError::from)?;

        let body = response.bytes().await.map_err(FetchError::from)?;
        let products: Vec<Product> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(count = products.len(), "products fetched");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.products_url()
    }
}
