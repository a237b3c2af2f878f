//! Derived catalog view
//!
//! Recomputed from scratch for every render: filter, then sort, then slice.

use super::filter::filter_by_category;
use super::pagination::{page_count, paginate};
use super::sort::sort_products;
use super::state::CatalogState;
use crate::types::{Product, PAGE_SIZE};

/// What a view shows for one state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// Products on the current page, in display order
    pub items: Vec<&'a Product>,

    /// Pages available for the current filter
    pub page_count: usize,

    /// Current page, as held in state (may be out of range)
    pub page_number: usize,

    /// Products matching the current filter
    pub matching: usize,

    /// All fetched products
    pub total: usize,
}

impl<'a> CatalogView<'a> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 0 && self.page_count > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_number.saturating_add(1) < self.page_count
    }
}

impl CatalogState {
    /// Derive the visible page with the default page size
    pub fn view(&self) -> CatalogView<'_> {
        self.view_with_page_size(PAGE_SIZE)
    }

    pub fn view_with_page_size(&self, page_size: usize) -> CatalogView<'_> {
        let filtered = filter_by_category(&self.products, &self.selected_category);
        let sorted = sort_products(&filtered, self.sort_by, self.sort_direction);
        let items = paginate(&sorted, self.page_number, page_size).to_vec();

        CatalogView {
            items,
            page_count: page_count(sorted.len(), page_size),
            page_number: self.page_number,
            matching: sorted.len(),
            total: self.products.len(),
        }
    }
}
