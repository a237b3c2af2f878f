//! Category filter stage

use crate::types::Product;

/// Products whose category equals `category` exactly, in input order.
///
/// An empty `category` selects everything.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.category == category).collect()
}
