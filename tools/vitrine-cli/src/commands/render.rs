//! Write the server-rendered storefront page.

use std::fs;

use anyhow::{Context as _, Result};
use vitrine_commerce::view::{ViewEvent, ViewState};
use vitrine_commerce::ProductId;
use vitrine_render::{state_href, Storefront};

use super::{listing_state, parse_gallery_key, RenderArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let state = build_state(&args, ctx)?;
    let html = Storefront::new(&ctx.catalog, &ctx.config).render_page(&state)?;

    match &args.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "url": state_href(&state),
                }));
            } else {
                ctx.output.success(&format!(
                    "Wrote {} ({})",
                    path.display(),
                    format_bytes(html.len())
                ));
                ctx.output.kv("url", &state_href(&state));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// Replay the flags as view events, in the order a shopper would.
fn build_state(args: &RenderArgs, ctx: &Context) -> Result<ViewState> {
    let breakpoint = ctx.config.display.sidebar_breakpoint_px;
    let mut state = listing_state(&args.category, args.search.as_deref())?;

    if let Some(id) = &args.product {
        let id = ProductId::new(id.trim());
        if ctx.catalog.get(&id).is_none() {
            ctx.output
                .warn(&format!("Product not in catalog, no overlay rendered: {}", id));
        }
        state.apply_with_breakpoint(ViewEvent::OpenProduct(id), breakpoint);
        if let Some(image) = &args.image {
            state.apply_with_breakpoint(ViewEvent::ShowImage(parse_gallery_key(image)?), breakpoint);
        }
    }
    if args.menu {
        state.apply_with_breakpoint(ViewEvent::OpenSidebar, breakpoint);
    }
    if let Some(width) = args.width {
        state.apply_with_breakpoint(ViewEvent::ViewportResized { width }, breakpoint);
    }
    if args.dismiss_alert {
        state.apply_with_breakpoint(ViewEvent::DismissAlert, breakpoint);
    }

    Ok(state)
}
