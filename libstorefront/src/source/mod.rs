//! Product sources
//!
//! A product source delivers the whole catalog in one call. The HTTP source
//! talks to the storefront API; the mock source serves tests.
//!
//! # Examples
//!
//! ```no_run
//! use libstorefront::source::{ProductSource, http::HttpProductSource};
//!
//! # async fn example() -> libstorefront::error::Result<()> {
//! let source = HttpProductSource::new("https://fakestoreapi.com")?;
//! let products = source.fetch_products().await?;
//! println!("Fetched {} products", products.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Product;

pub mod http;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Something that can deliver the full product collection
///
/// The payload is atomic: either every product or an error.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the complete product collection
    ///
    /// # Errors
    ///
    /// Returns `FetchError` (wrapped in `StorefrontError::Fetch`) when the
    /// request fails, the response is not a success, or the body is not a
    /// JSON array of products.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Short description for logs (e.g. the endpoint URL)
    fn describe(&self) -> String;
}
