//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod link;
pub mod list;
pub mod render;
pub mod show;

use anyhow::Result;
use clap::{Args, Subcommand};
use vitrine_commerce::catalog::{Category, GalleryKey};
use vitrine_commerce::view::ViewState;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category tab (iphone, xiaomi, demais).
    #[arg(short, long, default_value = "iphone")]
    pub category: String,

    /// Search text; overrides the category when non-empty.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id (e.g. iphone-16-128gb).
    pub id: String,
}

/// Arguments for the link command.
#[derive(Args)]
pub struct LinkArgs {
    /// Product id for an inquiry link.
    #[arg(required_unless_present_any = ["contact", "social"])]
    pub id: Option<String>,

    /// Plain contact link instead of a product inquiry.
    #[arg(long, conflicts_with_all = ["id", "social"])]
    pub contact: bool,

    /// Social profile link.
    #[arg(long, conflicts_with_all = ["id", "contact"])]
    pub social: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Category tab (iphone, xiaomi, demais).
    #[arg(short, long, default_value = "iphone")]
    pub category: String,

    /// Search text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Product to open in the detail overlay.
    #[arg(short, long)]
    pub product: Option<String>,

    /// Gallery image (front, side, back); requires --product.
    #[arg(short, long, requires = "product")]
    pub image: Option<String>,

    /// Render with the sidebar open.
    #[arg(long)]
    pub menu: bool,

    /// Render with the price alert dismissed.
    #[arg(long)]
    pub dismiss_alert: bool,

    /// Viewport width hint in px.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Starting category tab.
    #[arg(short, long, default_value = "iphone")]
    pub category: String,

    /// File the "save page" action writes to.
    #[arg(short, long, default_value = "vitrine.html")]
    pub output: String,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Export the active catalog as JSON.
    Export {
        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check a JSON catalog file.
    Check {
        /// Catalog file path.
        file: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}

/// View state for a category tab plus optional search text.
pub(crate) fn listing_state(category: &str, search: Option<&str>) -> Result<ViewState> {
    let mut state = ViewState::new();
    state.set_category(category.parse::<Category>()?);
    if let Some(text) = search {
        state.set_search(text);
    }
    Ok(state)
}

pub(crate) fn parse_gallery_key(value: &str) -> Result<GalleryKey> {
    Ok(value.parse::<GalleryKey>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_state() {
        let state = listing_state("xiaomi", Some("poco")).unwrap();
        assert_eq!(state.active_category, Category::Xiaomi);
        assert_eq!(state.search_text, "poco");
        assert!(listing_state("samsung", None).is_err());
    }

    #[test]
    fn test_parse_gallery_key() {
        assert_eq!(parse_gallery_key("back").unwrap(), GalleryKey::Back);
        assert!(parse_gallery_key("top").is_err());
    }
}
