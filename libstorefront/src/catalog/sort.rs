//! Sort stage
//!
//! Titles are ordered with the Unicode Collation Algorithm (root locale),
//! prices numerically. The sort is stable and always produces a new vector,
//! so the filtered sequence it reads from is never reordered.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::types::{Product, SortBy, SortDirection};

thread_local! {
    static COLLATOR: Option<Collator> = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "collation data unavailable, falling back to case-insensitive title order");
            None
        }
    };
}

/// Locale-aware comparison of two titles
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fallback_compare(a, b),
    })
}

// Lowercase before uppercase on a case-only tie, as the collator does.
fn fallback_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

// -0.0 == 0.0; NaN sorts after every number and ties with itself.
fn compare_prices(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Order `products` by `key` in `direction`.
///
/// Descending flips the comparator, so equal elements keep their input
/// order in both directions.
pub fn sort_products<'a>(
    products: &[&'a Product],
    key: SortBy,
    direction: SortDirection,
) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortBy::Name => compare_titles(&a.title, &b.title),
            SortBy::Price => compare_prices(a.price, b.price),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}
