//! Shared fixtures for TUI tests

#![allow(dead_code)]

use libstorefront::{CatalogEvent, Product};
use storefront_tui::app::{reduce, Action, AppState};

/// 20 products: 3 electronics, the rest split between other categories
pub fn catalog_products() -> Vec<Product> {
    (0..20)
        .map(|i| {
            let category = match i {
                2 | 7 | 15 => "electronics",
                0..=5 => "jewelery",
                6..=12 => "men's clothing",
                _ => "women's clothing",
            };
            Product::new(
                i + 1,
                format!("Item {:02}", i + 1),
                10.0 + (i as f64 * 7.0) % 50.0,
                format!("https://example.test/{}.jpg", i + 1),
                category,
            )
        })
        .collect()
}

/// App state after the first fetch succeeded
pub fn loaded_state() -> AppState {
    let state = reduce(AppState::new(), Action::ReloadRequested);
    let request_id = state.pending_request.unwrap();
    reduce(
        state,
        Action::LoadFinished {
            request_id,
            event: CatalogEvent::FetchSucceeded(catalog_products()),
        },
    )
}
