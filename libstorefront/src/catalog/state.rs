//! Catalog state and its transitions
//!
//! The state is a plain value owned by whichever view is showing the
//! catalog. Transitions are total: every event produces a new state and
//! none of them can fail.

use crate::error::FetchError;
use crate::types::{Product, SortBy, SortDirection};

/// Everything the user has selected, plus the fetched products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Fetched products, replaced only by a successful fetch
    pub products: Vec<Product>,

    /// Category filter; empty means no filter
    pub selected_category: String,

    pub sort_by: SortBy,

    pub sort_direction: SortDirection,

    /// Zero-based page index
    pub page_number: usize,
}

/// Events that drive catalog state
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The product fetch completed with a full collection
    FetchSucceeded(Vec<Product>),

    /// The product fetch failed; state is left as it was
    FetchFailed(FetchError),

    CategoryChanged(String),

    SortByChanged(SortBy),

    SortDirectionToggled,

    /// Jump to a page; not clamped here
    PageChanged(usize),
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, returning the next state
    pub fn apply(self, event: CatalogEvent) -> CatalogState {
        match event {
            CatalogEvent::FetchSucceeded(products) => CatalogState {
                products,
                page_number: 0,
                ..self
            },

            CatalogEvent::FetchFailed(_) => self,

            CatalogEvent::CategoryChanged(selected_category) => CatalogState {
                selected_category,
                page_number: 0,
                ..self
            },

            CatalogEvent::SortByChanged(sort_by) => CatalogState {
                sort_by,
                page_number: 0,
                ..self
            },

            CatalogEvent::SortDirectionToggled => CatalogState {
                sort_direction: self.sort_direction.toggled(),
                page_number: 0,
                ..self
            },

            CatalogEvent::PageChanged(page_number) => CatalogState {
                page_number,
                ..self
            },
        }
    }
}

/// Free-function form of [`CatalogState::apply`]
pub fn reduce(state: CatalogState, event: CatalogEvent) -> CatalogState {
    state.apply(event)
}
