//! Product records and their image gallery.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::catalog::Category;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Factor applied to the final price for the crossed-out price on cards.
pub const CARD_COMPARE_AT_FACTOR: f64 = 1.2;

/// Factor applied to the final price for the "De:" price in the detail view.
pub const DETAIL_COMPARE_AT_FACTOR: f64 = 1.3;

/// Quantities at or below this trigger the scarcity message.
pub const SCARCITY_THRESHOLD: u32 = 3;

/// Advisory stock label. Not tied to `available_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Last Units")]
    LastUnits,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// The authored value (`"In Stock"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LastUnits => "Last Units",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Label shown to shoppers.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "Em estoque",
            StockStatus::LastUnits => "Últimas unidades",
            StockStatus::OutOfStock => "Esgotado",
        }
    }

    /// CSS modifier for the stock badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-available",
            StockStatus::LastUnits => "stock-low",
            StockStatus::OutOfStock => "stock-out",
        }
    }
}

/// One of the three fixed image angles of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKey {
    #[default]
    Front,
    Side,
    Back,
}

impl GalleryKey {
    /// All keys, in gallery order.
    pub const ALL: [GalleryKey; 3] = [GalleryKey::Front, GalleryKey::Side, GalleryKey::Back];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryKey::Front => "front",
            GalleryKey::Side => "side",
            GalleryKey::Back => "back",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryKey::Front => "Frente",
            GalleryKey::Side => "Lateral",
            GalleryKey::Back => "Traseira",
        }
    }
}

impl fmt::Display for GalleryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(GalleryKey::Front),
            "side" => Ok(GalleryKey::Side),
            "back" => Ok(GalleryKey::Back),
            other => Err(CommerceError::InvalidGalleryKey(other.to_string())),
        }
    }
}

/// Image locations for the three gallery angles. Empty means "no image".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ProductImages {
    pub front: String,
    pub side: String,
    pub back: String,
}

impl ProductImages {
    /// The same location for every angle.
    pub fn uniform(src: impl Into<String>) -> Self {
        let src = src.into();
        Self {
            front: src.clone(),
            side: src.clone(),
            back: src,
        }
    }

    /// Location for `key`, or `None` when that angle has no image.
    pub fn get(&self, key: GalleryKey) -> Option<&str> {
        let src = match key {
            GalleryKey::Front => &self.front,
            GalleryKey::Side => &self.side,
            GalleryKey::Back => &self.back,
        };
        let src = src.trim();
        if src.is_empty() {
            None
        } else {
            Some(src)
        }
    }

    /// Keys that have an image, in gallery order.
    pub fn available_keys(&self) -> Vec<GalleryKey> {
        GalleryKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_some())
            .collect()
    }
}

/// A color option with the swatch class used to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch<'a> {
    pub name: &'a str,
    pub css_class: &'static str,
}

/// Swatch class for a color name. Unknown colors get a neutral swatch.
pub fn swatch_class(color: &str) -> &'static str {
    match color {
        "Preto" => "swatch-black",
        "Prata" | "Silver" => "swatch-silver",
        "Rosé" => "swatch-rose",
        "Dourado" | "Gold" => "swatch-gold",
        "Branco" => "swatch-white",
        "Laranja" => "swatch-orange",
        "Azul" => "swatch-blue",
        "Verde" => "swatch-green",
        "Lilás" => "swatch-lilac",
        "Roxo" => "swatch-purple",
        "Branco/Preto" => "swatch-white-black",
        _ => "swatch-neutral",
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "ProductRecord")]
pub struct Product {
    /// Derived from `name`, unique within a catalog.
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Retained but never displayed.
    #[serde(with = "money::brl_decimal")]
    pub base_price: Money,
    /// The displayed and quoted price.
    #[serde(with = "money::brl_decimal")]
    pub final_price: Money,
    pub colors: Vec<String>,
    pub specs: Vec<String>,
    pub description: String,
    pub images: ProductImages,
    pub stock_status: StockStatus,
    pub available_quantity: u32,
}

impl Product {
    /// Create a product with the given name; every other field is empty.
    pub fn new(name: impl Into<String>, category: Category, final_price: Money) -> Self {
        let name = name.into();
        Self {
            id: ProductId::from_name(&name),
            name,
            category,
            base_price: final_price,
            final_price,
            colors: Vec::new(),
            specs: Vec::new(),
            description: String::new(),
            images: ProductImages::default(),
            stock_status: StockStatus::InStock,
            available_quantity: 0,
        }
    }

    /// Case-insensitive substring match against the name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Crossed-out reference price on product cards.
    pub fn card_compare_at_price(&self) -> Money {
        self.final_price.multiply_decimal(CARD_COMPARE_AT_FACTOR)
    }

    /// Crossed-out reference price in the detail overlay.
    pub fn detail_compare_at_price(&self) -> Money {
        self.final_price.multiply_decimal(DETAIL_COMPARE_AT_FACTOR)
    }

    /// Urgency message for low quantities.
    pub fn scarcity_message(&self) -> Option<String> {
        match self.available_quantity {
            0 => None,
            1 => Some("Resta apenas 1 unidade!".to_string()),
            n if n <= SCARCITY_THRESHOLD => Some(format!("Restam apenas {} unidades!", n)),
            _ => None,
        }
    }

    /// Colors paired with their swatch classes, in authored order.
    pub fn color_swatches(&self) -> Vec<ColorSwatch<'_>> {
        self.colors
            .iter()
            .map(|name| ColorSwatch {
                name,
                css_class: swatch_class(name),
            })
            .collect()
    }
}

/// Wire shape of a product: every field optional so partially authored
/// records still produce a homogeneous [`Product`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProductRecord {
    id: Option<String>,
    name: String,
    category: Category,
    #[serde(with = "money::brl_decimal")]
    base_price: Money,
    #[serde(with = "money::brl_decimal")]
    final_price: Money,
    colors: Vec<String>,
    specs: Vec<String>,
    description: String,
    images: ProductImages,
    stock_status: StockStatus,
    available_quantity: u32,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let id = match record.id {
            Some(id) if !id.trim().is_empty() => ProductId::new(id),
            _ => ProductId::from_name(&record.name),
        };
        Self {
            id,
            name: record.name,
            category: record.category,
            base_price: record.base_price,
            final_price: record.final_price,
            colors: record.colors,
            specs: record.specs,
            description: record.description,
            images: record.images,
            stock_status: record.stock_status,
            available_quantity: record.available_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        let mut p = Product::new("iPhone 16 128GB", Category::Iphone, Money::brl(5200.0));
        p.colors = vec!["Rosé".into(), "Preto".into(), "Ciano".into()];
        p.images = ProductImages {
            front: "https://img.example/front.jpg".into(),
            side: String::new(),
            back: "https://img.example/back.jpg".into(),
        };
        p
    }

    #[test]
    fn test_product_creation() {
        let p = sample();
        assert_eq!(p.id.as_str(), "iphone-16-128gb");
        assert_eq!(p.category, Category::Iphone);
        assert_eq!(p.stock_status, StockStatus::InStock);
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let p = sample();
        assert!(p.name_contains("iphone"));
        assert!(p.name_contains("16 128"));
        assert!(!p.name_contains("redmi"));
    }

    #[test]
    fn test_compare_at_prices() {
        let p = sample();
        assert_eq!(p.card_compare_at_price(), Money::brl(6240.0));
        assert_eq!(p.detail_compare_at_price(), Money::brl(6760.0));
    }

    #[test]
    fn test_images_missing_angle() {
        let p = sample();
        assert_eq!(p.images.get(GalleryKey::Side), None);
        assert_eq!(
            p.images.get(GalleryKey::Front),
            Some("https://img.example/front.jpg")
        );
        assert_eq!(
            p.images.available_keys(),
            vec![GalleryKey::Front, GalleryKey::Back]
        );
    }

    #[test]
    fn test_scarcity_message() {
        let mut p = sample();
        assert_eq!(p.scarcity_message(), None);
        p.available_quantity = 1;
        assert_eq!(p.scarcity_message().as_deref(), Some("Resta apenas 1 unidade!"));
        p.available_quantity = 3;
        assert_eq!(p.scarcity_message().as_deref(), Some("Restam apenas 3 unidades!"));
        p.available_quantity = 4;
        assert_eq!(p.scarcity_message(), None);
    }

    #[test]
    fn test_color_swatches_keep_order() {
        let p = sample();
        let swatches = p.color_swatches();
        assert_eq!(swatches.len(), 3);
        assert_eq!(swatches[0].css_class, "swatch-rose");
        assert_eq!(swatches[1].css_class, "swatch-black");
        assert_eq!(swatches[2].css_class, "swatch-neutral");
    }

    #[test]
    fn test_deserialize_authored_record() {
        let json = r#"{
            "name": "Redmi 13C 8/256GB",
            "category": "xiaomi",
            "basePrice": 600,
            "finalPrice": 1100,
            "colors": ["Preto", "Azul"],
            "images": { "front": "a.jpg", "back": "c.jpg" },
            "stockStatus": "Last Units",
            "availableQuantity": 2
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "redmi-13c-8/256gb");
        assert_eq!(p.final_price, Money::brl(1100.0));
        assert_eq!(p.stock_status, StockStatus::LastUnits);
        assert_eq!(p.images.side, "");
        assert!(p.specs.is_empty());
        assert_eq!(p.description, "");
    }

    #[test]
    fn test_deserialize_keeps_explicit_id() {
        let json = r#"{ "id": "custom-id", "name": "Poco X7 12/512GB 5G" }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "custom-id");
        assert_eq!(p.category, Category::Iphone);
        assert!(p.final_price.is_zero());
    }

    #[test]
    fn test_serialize_uses_authored_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["finalPrice"], serde_json::json!(5200.0));
        assert_eq!(value["stockStatus"], serde_json::json!("In Stock"));
        assert_eq!(value["availableQuantity"], serde_json::json!(0));
    }

    #[test]
    fn test_gallery_key_parse() {
        assert_eq!("SIDE".parse::<GalleryKey>().unwrap(), GalleryKey::Side);
        assert!("top".parse::<GalleryKey>().is_err());
    }
}
