//! Store configuration.
//!
//! Every field has a default so an empty file (or no file) describes the
//! WBimportadoss storefront.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Branding and static copy.
    #[serde(default)]
    pub store: StoreInfo,

    /// Messaging deep-link settings.
    #[serde(default)]
    pub messaging: MessagingConfig,

    /// Social profile settings.
    #[serde(default)]
    pub social: SocialConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Branding and static copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Scrolling banner text.
    #[serde(default = "default_marquee")]
    pub marquee: String,

    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_store_name() -> String {
    "WBimportadoss".to_string()
}

fn default_tagline() -> String {
    "originais importados".to_string()
}

fn default_marquee() -> String {
    "QUALIDADE APPLE E XIAOMI • PARCELAMOS! • FRETE GRÁTIS EM SP • PRODUTOS ORIGINAIS".to_string()
}

fn default_footer() -> String {
    "© 2022 WBIMPORTADOSS - PRODUTOS ORIGINAIS".to_string()
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
            marquee: default_marquee(),
            footer: default_footer(),
        }
    }
}

/// Messaging service used for purchase inquiries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Service base URL; the contact id is appended as a path segment.
    #[serde(default = "default_messaging_base")]
    pub base_url: String,

    #[serde(default = "default_contact_id")]
    pub contact_id: String,

    /// Prefilled message; `{product}` is replaced with the product name.
    #[serde(default = "default_inquiry_template")]
    pub inquiry_template: String,
}

fn default_messaging_base() -> String {
    "https://wa.me".to_string()
}

fn default_contact_id() -> String {
    "5511960817540".to_string()
}

fn default_inquiry_template() -> String {
    "Olá WB! Tenho interesse no {product}".to_string()
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: default_messaging_base(),
            contact_id: default_contact_id(),
            inquiry_template: default_inquiry_template(),
        }
    }
}

/// Social profile link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default = "default_instagram_url")]
    pub instagram_url: String,
}

fn default_instagram_url() -> String {
    "https://www.instagram.com/wbimportadoss/".to_string()
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            instagram_url: default_instagram_url(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Viewport width (px) at which an open sidebar collapses.
    #[serde(default = "default_breakpoint")]
    pub sidebar_breakpoint_px: u32,

    /// Date shown in the "prices updated" alert.
    #[serde(default = "default_prices_updated")]
    pub prices_updated: NaiveDate,

    /// Mascot graphic shown in the header; empty hides it.
    #[serde(default)]
    pub mascot_url: String,
}

/// Width at which the layout switches from mobile to desktop.
pub const DEFAULT_SIDEBAR_BREAKPOINT_PX: u32 = 768;

fn default_breakpoint() -> u32 {
    DEFAULT_SIDEBAR_BREAKPOINT_PX
}

fn default_prices_updated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 16).unwrap_or_default()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sidebar_breakpoint_px: default_breakpoint(),
            prices_updated: default_prices_updated(),
            mascot_url: String::new(),
        }
    }
}

impl DisplayConfig {
    /// The "prices updated" date as shown to shoppers (`dd/mm/yyyy`).
    pub fn prices_updated_label(&self) -> String {
        self.prices_updated.format("%d/%m/%Y").to_string()
    }
}
