//! Show a single product the way the detail overlay presents it.

use anyhow::Result;
use serde::Serialize;
use vitrine_commerce::catalog::{GalleryKey, Product};
use vitrine_commerce::image::{ImageDisplay, ImageSlot, PLACEHOLDER_LABEL};
use vitrine_commerce::links::inquiry_link;
use vitrine_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct ProductDetail<'a> {
    #[serde(flatten)]
    product: &'a Product,
    compare_at: String,
    scarcity: Option<String>,
    inquiry_link: String,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(&ProductId::new(args.id.trim()))?;
    let link = inquiry_link(&ctx.config.messaging, &product.name)?;

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product,
            compare_at: product.detail_compare_at_price().display(),
            scarcity: product.scarcity_message(),
            inquiry_link: link.url,
        });
        return Ok(());
    }

    ctx.output.header(&product.name);
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("category", product.category.label());
    ctx.output.kv("de", &product.detail_compare_at_price().display());
    ctx.output.kv("por", &product.final_price.display());
    ctx.output.kv(
        "stock",
        &stock_badge(product.stock_status.label(), product.stock_status.css_class()),
    );
    ctx.output
        .kv("available", &product.available_quantity.to_string());
    if let Some(message) = product.scarcity_message() {
        ctx.output.warn(&message);
    }

    if !product.colors.is_empty() {
        ctx.output.info("");
        ctx.output.info("Cores:");
        for color in &product.colors {
            ctx.output.list_item(color);
        }
    }

    if !product.specs.is_empty() {
        ctx.output.info("");
        ctx.output.info("Especificações:");
        for spec in &product.specs {
            ctx.output.list_item(spec);
        }
    }

    ctx.output.info("");
    ctx.output.info("Imagens:");
    for key in GalleryKey::ALL {
        let slot = ImageSlot::new(product.images.get(key).unwrap_or_default());
        let shown = match slot.display() {
            ImageDisplay::Image(src) => src.to_string(),
            ImageDisplay::Placeholder => format!("({})", PLACEHOLDER_LABEL),
        };
        ctx.output.kv(key.label(), &shown);
    }

    ctx.output.info("");
    ctx.output.success(&format!("Comprar via WhatsApp: {}", link.url));

    Ok(())
}
