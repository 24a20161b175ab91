//! Top-level categories used for the default listing.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog category. Every product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Apple phones.
    #[default]
    Iphone,
    /// Xiaomi, Poco and Realme phones.
    Xiaomi,
    /// Everything else (accessories, watches, consoles).
    Demais,
}

impl Category {
    /// All categories, in tab order.
    pub const ALL: [Category; 3] = [Category::Iphone, Category::Xiaomi, Category::Demais];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Iphone => "iphone",
            Category::Xiaomi => "xiaomi",
            Category::Demais => "demais",
        }
    }

    /// Tab label shown to shoppers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Iphone => "Apple 🍎",
            Category::Xiaomi => "Xiaomi 📱",
            Category::Demais => "Demais Produtos 🎧⌚🎮",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iphone" => Ok(Category::Iphone),
            "xiaomi" => Ok(Category::Xiaomi),
            "demais" => Ok(Category::Demais),
            other => Err(CommerceError::InvalidCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_iphone() {
        assert_eq!(Category::default(), Category::Iphone);
    }

    #[test]
    fn test_parse() {
        assert_eq!("xiaomi".parse::<Category>().unwrap(), Category::Xiaomi);
        assert_eq!(" Demais ".parse::<Category>().unwrap(), Category::Demais);
        assert!(matches!(
            "tablets".parse::<Category>(),
            Err(CommerceError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_round_trip_names() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Xiaomi).unwrap();
        assert_eq!(json, "\"xiaomi\"");
    }
}
