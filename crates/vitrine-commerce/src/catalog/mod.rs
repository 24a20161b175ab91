//! Product catalog module.
//!
//! The catalog is fixed for the lifetime of a page: it is built once, then
//! only read. There is no mutation API.

mod category;
mod data;
mod product;

pub use category::Category;
pub use product::{
    swatch_class, ColorSwatch, GalleryKey, Product, ProductImages, StockStatus,
    CARD_COMPARE_AT_FACTOR, DETAIL_COMPARE_AT_FACTOR, SCARCITY_THRESHOLD,
};

use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashSet;

/// Immutable, ordered product store.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The store's authored catalog.
    pub fn builtin() -> Self {
        let products = data::builtin_products();
        tracing::debug!(count = products.len(), "loaded builtin catalog");
        Self { products }
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn try_new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let catalog = Self::try_new(products)?;
        tracing::debug!(count = catalog.len(), "loaded catalog from json");
        Ok(catalog)
    }

    /// Export as a pretty-printed JSON array.
    pub fn to_json_pretty(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing when absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
