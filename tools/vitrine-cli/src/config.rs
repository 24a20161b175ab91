//! Store configuration files.
//!
//! The config types live in `vitrine_commerce::config`; this module reads
//! and writes them. Files ending in `.json` use JSON, anything else TOML.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use vitrine_commerce::config::StoreConfig;

/// File names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Load config from a file.
pub fn load(path: impl AsRef<Path>) -> Result<StoreConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), "loaded store config");
    Ok(config)
}

/// Save config to a file.
pub fn save(config: &StoreConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// First config file present in `dir`.
pub fn find_config_file(dir: &Path) -> Option<std::path::PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Read a single value by dotted key, rendered as JSON.
pub fn get_value(config: &StoreConfig, key: &str) -> Result<serde_json::Value> {
    let tree = serde_json::to_value(config)?;
    let mut node = &tree;
    for part in key.split('.') {
        node = match node.get(part) {
            Some(child) => child,
            None => bail!("Unknown config key: {}", key),
        };
    }
    Ok(node.clone())
}

/// Set a single value by dotted key.
pub fn set_value(config: &mut StoreConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => config.store.name = value.to_string(),
        ["store", "tagline"] => config.store.tagline = value.to_string(),
        ["store", "marquee"] => config.store.marquee = value.to_string(),
        ["store", "footer"] => config.store.footer = value.to_string(),
        ["messaging", "base_url"] => config.messaging.base_url = value.to_string(),
        ["messaging", "contact_id"] => config.messaging.contact_id = value.to_string(),
        ["messaging", "inquiry_template"] => {
            config.messaging.inquiry_template = value.to_string()
        }
        ["social", "instagram_url"] => config.social.instagram_url = value.to_string(),
        ["display", "sidebar_breakpoint_px"] => {
            config.display.sidebar_breakpoint_px = value
                .parse()
                .with_context(|| format!("Invalid breakpoint: {}", value))?
        }
        ["display", "prices_updated"] => {
            config.display.prices_updated = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", value))?
        }
        ["display", "mascot_url"] => config.display.mascot_url = value.to_string(),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

/// Problems worth reporting before a config goes live.
pub fn validate(config: &StoreConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }
    if let Err(e) = vitrine_commerce::links::contact_link(&config.messaging) {
        errors.push(format!("messaging.base_url: {}", e));
    }
    if config.messaging.contact_id.trim().is_empty() {
        errors.push("messaging.contact_id is required".to_string());
    }
    if !config
        .messaging
        .inquiry_template
        .contains(vitrine_commerce::links::PRODUCT_PLACEHOLDER)
    {
        warnings.push(format!(
            "messaging.inquiry_template has no {} placeholder",
            vitrine_commerce::links::PRODUCT_PLACEHOLDER
        ));
    }
    if let Err(e) = vitrine_commerce::links::social_link(&config.social) {
        errors.push(format!("social.instagram_url: {}", e));
    }
    if config.display.sidebar_breakpoint_px == 0 {
        warnings.push("display.sidebar_breakpoint_px is 0; the sidebar never collapses".to_string());
    }

    (errors, warnings)
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    let defaults = StoreConfig::default();
    format!(
        r#"# Vitrine store configuration
# Every key is optional; missing keys keep the values shown here.

[store]
name = "{name}"
tagline = "{tagline}"
marquee = "{marquee}"
footer = "{footer}"

[messaging]
# Inquiry links are <base_url>/<contact_id>?text=<inquiry_template>
base_url = "{base_url}"
contact_id = "{contact_id}"
# {{product}} is replaced with the product name
inquiry_template = "{inquiry_template}"

[social]
instagram_url = "{instagram_url}"

[display]
# An open sidebar closes when the viewport is at least this wide
sidebar_breakpoint_px = {breakpoint}
prices_updated = "{prices_updated}"
# mascot_url = "https://example.com/mascot.gif"
"#,
        name = defaults.store.name,
        tagline = defaults.store.tagline,
        marquee = defaults.store.marquee,
        footer = defaults.store.footer,
        base_url = defaults.messaging.base_url,
        contact_id = defaults.messaging.contact_id,
        inquiry_template = defaults.messaging.inquiry_template,
        instagram_url = defaults.social.instagram_url,
        breakpoint = defaults.display.sidebar_breakpoint_px,
        prices_updated = defaults.display.prices_updated.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let parsed: StoreConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StoreConfig::default());
    }

    #[test]
    fn test_get_value() {
        let config = StoreConfig::default();
        assert_eq!(
            get_value(&config, "messaging.contact_id").unwrap(),
            serde_json::json!("5511960817540")
        );
        assert_eq!(
            get_value(&config, "display.sidebar_breakpoint_px").unwrap(),
            serde_json::json!(768)
        );
        assert!(get_value(&config, "display.nope").is_err());
    }

    #[test]
    fn test_set_value() {
        let mut config = StoreConfig::default();
        set_value(&mut config, "store.name", "Loja Teste").unwrap();
        set_value(&mut config, "display.prices_updated", "2025-03-01").unwrap();
        assert_eq!(config.store.name, "Loja Teste");
        assert_eq!(config.display.prices_updated_label(), "01/03/2025");
        assert!(set_value(&mut config, "display.currency", "USD").is_err());

        assert!(set_value(&mut config, "display.prices_updated", "01/03/2025").is_err());
        assert!(set_value(&mut config, "display.sidebar_breakpoint_px", "wide").is_err());
        assert!(set_value(&mut config, "store.owner", "x").is_err());
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = validate(&StoreConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = StoreConfig::default();
        config.messaging.base_url = "wa.me".into();
        config.messaging.inquiry_template = "Oi!".into();
        let (errors, warnings) = validate(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(warnings.len(), 1);
    }
}
