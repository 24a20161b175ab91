//! Listing query: the visible subset of the catalog.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Inputs of the product listing.
///
/// A non-blank search text takes precedence over the category: while
/// searching, every category is considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListingQuery {
    /// Active category tab.
    pub category: Category,
    /// Raw search text as typed.
    pub text: String,
}

impl ListingQuery {
    /// Create a listing query for a category with no search text.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            text: String::new(),
        }
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// The normalized needle: trimmed and lowercased, `None` when blank.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Whether search text overrides the category.
    pub fn is_searching(&self) -> bool {
        self.needle().is_some()
    }

    /// Whether a single product is part of the listing.
    pub fn matches(&self, product: &Product) -> bool {
        match self.needle() {
            Some(needle) => product.name_contains(&needle),
            None => product.category == self.category,
        }
    }

    /// Filter `products`, preserving their order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let visible: Vec<&Product> = match self.needle() {
            Some(needle) => products
                .iter()
                .filter(|p| p.name_contains(&needle))
                .collect(),
            None => products
                .iter()
                .filter(|p| p.category == self.category)
                .collect(),
        };

        tracing::debug!(
            category = %self.category,
            searching = self.is_searching(),
            total = products.len(),
            visible = visible.len(),
            "derived product listing"
        );

        visible
    }
}

/// Derive the visible products for a category and search text.
pub fn visible_products<'a>(
    products: &'a [Product],
    category: Category,
    search_text: &str,
) -> Vec<&'a Product> {
    ListingQuery::new(category)
        .with_text(search_text)
        .apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn two_products() -> Vec<Product> {
        vec![
            Product::new("iPhone 16 128GB", Category::Iphone, Money::brl(5200.0)),
            Product::new("Redmi 13C 8/256GB", Category::Xiaomi, Money::brl(1100.0)),
        ]
    }

    fn names(list: &[&Product]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_category_only() {
        let products = two_products();
        let visible = visible_products(&products, Category::Xiaomi, "");
        assert_eq!(names(&visible), vec!["Redmi 13C 8/256GB"]);
    }

    #[test]
    fn test_search_ignores_category() {
        let products = two_products();
        let visible = visible_products(&products, Category::Xiaomi, "iphone");
        assert_eq!(names(&visible), vec!["iPhone 16 128GB"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let products = two_products();
        assert!(visible_products(&products, Category::Iphone, "zzz").is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let products = two_products();
        let visible = visible_products(&products, Category::Iphone, "  REDMI 13c  ");
        assert_eq!(names(&visible), vec!["Redmi 13C 8/256GB"]);
    }

    #[test]
    fn test_blank_search_falls_back_to_category() {
        let products = two_products();
        let query = ListingQuery::new(Category::Iphone).with_text("   ");
        assert!(!query.is_searching());
        assert_eq!(names(&query.apply(&products)), vec!["iPhone 16 128GB"]);
    }

    #[test]
    fn test_empty_category() {
        let products = two_products();
        assert!(visible_products(&products, Category::Demais, "").is_empty());
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let products = two_products();
        let query = ListingQuery::new(Category::Xiaomi).with_text("13");
        let applied = query.apply(&products);
        let by_matches: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
        assert_eq!(applied, by_matches);
    }
}
