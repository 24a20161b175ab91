//! List the products visible for a category or search.

use anyhow::Result;
use serde::Serialize;
use vitrine_commerce::catalog::Product;

use super::{listing_state, ListArgs};
use crate::context::Context;

/// One row of the listing.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub compare_at: String,
    pub stock: String,
    pub available_quantity: u32,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.final_price.display(),
            compare_at: product.card_compare_at_price().display(),
            stock: product.stock_status.as_str().to_string(),
            available_quantity: product.available_quantity,
        }
    }
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let state = listing_state(&args.category, args.search.as_deref())?;
    let visible = state.visible_products(&ctx.catalog);
    let rows: Vec<ProductSummary> = visible.iter().map(|p| ProductSummary::from(*p)).collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    let query = state.listing_query();
    if query.is_searching() {
        ctx.output.header(&format!("Busca: {}", state.search_text.trim()));
    } else {
        ctx.output.header(state.active_category.label());
    }

    if rows.is_empty() {
        if query.is_searching() {
            ctx.output.info(&format!(
                "Nenhum produto encontrado para \"{}\"",
                state.search_text.trim()
            ));
        } else {
            ctx.output.info("Nenhum produto nesta categoria no momento.");
        }
        return Ok(());
    }

    let widths = [28, 30, 14, 14];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "STOCK"], &widths);
    for row in &rows {
        ctx.output
            .table_row(&[&row.id, &row.name, &row.price, &row.stock], &widths);
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", rows.len()));

    Ok(())
}
