//! Catalog core
//!
//! - `state`: what the user has selected, and the pure transition function
//! - `filter`, `sort`, `pagination`: the derivation stages, run in that order
//! - `view`: the composed derivation for one render
//!
//! Every stage borrows the product list and returns a new sequence; nothing
//! here mutates the fetched products.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod view;

pub use filter::filter_by_category;
pub use pagination::{page_count, paginate};
pub use sort::{compare_titles, sort_products};
pub use state::{reduce, CatalogEvent, CatalogState};
pub use view::CatalogView;
