//! Storefront - a browsable product catalog
//!
//! This library provides the catalog core: fetching the product collection,
//! and deriving filtered, sorted and paginated views of it from a small,
//! explicitly owned state value.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use catalog::{reduce, CatalogEvent, CatalogState, CatalogView};
pub use config::Config;
pub use error::{FetchError, Result, StorefrontError};
pub use types::{Product, SortBy, SortDirection, CATEGORY_OPTIONS, PAGE_SIZE};
