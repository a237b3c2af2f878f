//! Core types for Storefront

use serde::{Deserialize, Serialize};

/// Number of products shown per page
pub const PAGE_SIZE: usize = 8;

/// Category selector options as `(value, label)`, in display order.
///
/// The empty value means "no filter". The data model does not enforce this
/// set; a product may carry any category string.
pub const CATEGORY_OPTIONS: [(&str, &str); 5] = [
    ("", "All categories"),
    ("electronics", "Electronics"),
    ("jewelery", "Jewelery"),
    ("men's clothing", "Men's Clothing"),
    ("women's clothing", "Women's Clothing"),
];

/// Label for a category value, falling back to the raw value
pub fn category_label(value: &str) -> &str {
    CATEGORY_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// A catalog entry as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }

    /// Price as shown on a product card: `$` plus the number as given
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Dimension products are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Price,
}

impl SortBy {
    /// The other sort key
    pub fn next(self) -> Self {
        match self {
            SortBy::Name => SortBy::Price,
            SortBy::Price => SortBy::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::Price => "Price",
        }
    }
}

/// Ordering applied to the sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Label of the direction toggle button
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Asc",
            SortDirection::Descending => "Desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_and_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price, 109.95);
    }

    #[test]
    fn test_product_missing_field_is_rejected() {
        let json = r#"{ "id": 1, "title": "No price", "image": "x", "category": "jewelery" }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_display_price_keeps_number_as_given() {
        let mut product = Product::new(1, "Ring", 109.95, "img", "jewelery");
        assert_eq!(product.display_price(), "$109.95");

        product.price = 22.3;
        assert_eq!(product.display_price(), "$22.3");

        product.price = 64.0;
        assert_eq!(product.display_price(), "$64");
    }

    #[test]
    fn test_sort_by_next_and_label() {
        assert_eq!(SortBy::default(), SortBy::Name);
        assert_eq!(SortBy::Name.label(), "Name");
        assert_eq!(SortBy::Price.label(), "Price");
        assert_eq!(SortBy::Name.next(), SortBy::Price);
        assert_eq!(SortBy::Price.next(), SortBy::Name);
    }

    #[test]
    fn test_sort_direction_toggle_and_label() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.label(), "Asc");
        assert_eq!(SortDirection::Descending.label(), "Desc");
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(""), "All categories");
        assert_eq!(category_label("men's clothing"), "Men's Clothing");
        assert_eq!(category_label("garden"), "garden");
    }
}
