//! Catalog export and validation.

use std::collections::HashSet;
use std::fs;

use anyhow::{bail, Context as _, Result};
use vitrine_commerce::catalog::{Catalog, Category, GalleryKey};

use super::{CatalogArgs, CatalogCommand};
use crate::context::{load_catalog, Context};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Export { output } => export_catalog(output.as_deref(), ctx),
        CatalogCommand::Check { file } => check_catalog(&file, ctx),
    }
}

fn export_catalog(output: Option<&str>, ctx: &Context) -> Result<()> {
    let json = ctx.catalog.to_json_pretty()?;

    match output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
            ctx.output.success(&format!(
                "Exported {} product(s) to {}",
                ctx.catalog.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn check_catalog(file: &str, ctx: &Context) -> Result<()> {
    ctx.output.header("Checking catalog");

    let path = ctx.resolve_path(file);
    let catalog = load_catalog(&path)?;
    let warnings = catalog_warnings(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "products": catalog.len(),
            "warnings": warnings,
        }));
        return Ok(());
    }

    for category in Category::ALL {
        let count = catalog.iter().filter(|p| p.category == category).count();
        ctx.output.kv(category.as_str(), &count.to_string());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if catalog.is_empty() {
        bail!("Catalog has no products");
    }

    ctx.output.success(&format!("{} product(s) OK", catalog.len()));
    Ok(())
}

/// Authoring slips that still load, such as a missing image angle.
pub fn catalog_warnings(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut names = HashSet::new();

    for product in catalog.iter() {
        if product.name.trim().is_empty() {
            warnings.push(format!("{}: empty name", product.id));
        }
        if !names.insert(product.name.to_lowercase()) {
            warnings.push(format!("{}: duplicate name", product.id));
        }
        if product.final_price.is_zero() {
            warnings.push(format!("{}: final price is zero", product.id));
        }
        let missing: Vec<&str> = GalleryKey::ALL
            .into_iter()
            .filter(|key| product.images.get(*key).is_none())
            .map(|key| key.as_str())
            .collect();
        if !missing.is_empty() {
            warnings.push(format!(
                "{}: no image for {} (placeholder shown)",
                product.id,
                missing.join(", ")
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::catalog::{Product, ProductImages};
    use vitrine_commerce::Money;

    #[test]
    fn test_catalog_warnings() {
        let mut complete = Product::new("iPhone 16 128GB", Category::Iphone, Money::brl(4700.0));
        complete.images = ProductImages::uniform("https://img.test/16.jpg");
        let mut partial = Product::new("Redmi 13C 8/256GB", Category::Xiaomi, Money::brl(0.0));
        partial.images.front = "https://img.test/13c.jpg".into();

        let catalog = Catalog::try_new(vec![complete, partial]).unwrap();
        let warnings = catalog_warnings(&catalog);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("final price is zero"));
        assert!(warnings[1].contains("side, back"));
    }
}
