//! Fetch boundary
//!
//! Turns one product fetch into a catalog event. Failures are logged here
//! and go no further than a `FetchFailed` event, which leaves catalog state
//! untouched.

use crate::catalog::CatalogEvent;
use crate::error::{FetchError, StorefrontError};
use crate::source::ProductSource;

/// Fetch the catalog once and describe the outcome as an event
pub async fn load_catalog(source: &dyn ProductSource) -> CatalogEvent {
    match source.fetch_products().await {
        Ok(products) => {
            tracing::info!(
                source = %source.describe(),
                count = products.len(),
                "catalog loaded"
            );
            CatalogEvent::FetchSucceeded(products)
        }
        Err(e) => {
            tracing::warn!(source = %source.describe(), error = %e, "catalog fetch failed");
            let error = match e {
                StorefrontError::Fetch(fetch) => fetch,
                other => FetchError::Network(other.to_string()),
            };
            CatalogEvent::FetchFailed(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogState;
    use crate::source::mock::MockProductSource;
    use crate::types::Product;

    #[tokio::test]
    async fn test_success_becomes_fetch_succeeded() {
        let products = vec![Product::new(1, "Ring", 5.0, "", "jewelery")];
        let source = MockProductSource::with_products(products.clone());

        let event = load_catalog(&source).await;
        assert_eq!(event, CatalogEvent::FetchSucceeded(products));
    }

    #[tokio::test]
    async fn test_failure_leaves_products_empty() {
        let source = MockProductSource::failing(FetchError::Network("connection refused".to_string()));

        let event = load_catalog(&source).await;
        assert!(matches!(event, CatalogEvent::FetchFailed(FetchError::Network(_))));

        let state = CatalogState::new().apply(event);
        assert!(state.products.is_empty());
        assert_eq!(state.view().page_count, 0);
    }
}
