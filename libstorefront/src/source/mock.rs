//! Mock product source for testing
//!
//! Serves a fixed product list or a configured failure, optionally after a
//! delay, and records how many times it was asked.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{FetchError, Result};
use crate::source::ProductSource;
use crate::types::Product;

/// Configuration for mock source behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Products returned on success
    pub products: Vec<Product>,

    /// Failure to return instead of products
    pub error: Option<FetchError>,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch_products has been called
    pub fetch_call_count: Arc<Mutex<usize>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            error: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// Mock source for testing
pub struct MockProductSource {
    config: MockConfig,
}

impl MockProductSource {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A source that always returns `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(MockConfig {
            products,
            ..Default::default()
        })
    }

    /// A source that always fails with `error`
    pub fn failing(error: FetchError) -> Self {
        Self::new(MockConfig {
            error: Some(error),
            ..Default::default()
        })
    }

    /// Add latency before each response
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.config.delay = delay;
        self
    }

    pub fn fetch_call_count(&self) -> usize {
        self.config
            .fetch_call_count
            .lock()
            .map(|count| *count)
            .unwrap_or(0)
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        if let Ok(mut count) = self.config.fetch_call_count.lock() {
            *count += 1;
        }

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.error {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.config.products.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[tokio::test]
    async fn test_mock_returns_products_and_counts_calls() {
        let source = MockProductSource::with_products(vec![Product::new(1, "Ring", 5.0, "", "jewelery")]);

        let products = source.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);

        let _ = source.fetch_products().await;
        assert_eq!(source.fetch_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let source = MockProductSource::failing(FetchError::Status(500));
        let result = source.fetch_products().await;
        assert!(matches!(
            result,
            Err(StorefrontError::Fetch(FetchError::Status(500)))
        ));
    }
}
