//! Storefront domain types and logic for Vitrine.
//!
//! - **Catalog**: fixed, ordered product records with BRL prices
//! - **Search**: the visible listing (search text over category)
//! - **View**: transient page state and its transitions
//! - **Image**: per-instance fallback latch for product images
//! - **Links**: messaging deep links and the social profile
//! - **Config**: store copy, contact details and display settings
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let mut state = ViewState::new();
//! state.apply(ViewEvent::Search("redmi".into()));
//!
//! let visible = state.visible_products(&catalog);
//! assert!(visible.iter().all(|p| p.name.to_lowercase().contains("redmi")));
//!
//! let link = inquiry_link(&MessagingConfig::default(), &visible[0].name).unwrap();
//! assert!(link.url.starts_with("https://wa.me/"));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod config;
pub mod image;
pub mod links;
pub mod search;
pub mod view;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, ColorSwatch, GalleryKey, Product, ProductImages, StockStatus,
    };

    // Search and view
    pub use crate::search::{visible_products, ListingQuery};
    pub use crate::view::{ViewEvent, ViewState};

    // Images and links
    pub use crate::image::{ImageDisplay, ImageSlot, PLACEHOLDER_LABEL};
    pub use crate::links::{contact_link, inquiry_link, social_link, LinkKind, OutboundLink};

    // Config
    pub use crate::config::{DisplayConfig, MessagingConfig, SocialConfig, StoreConfig, StoreInfo};
}
