//! Print outbound links.

use anyhow::{bail, Result};
use vitrine_commerce::links::{contact_link, inquiry_link, social_link};
use vitrine_commerce::ProductId;

use super::LinkArgs;
use crate::context::Context;

/// Run the link command.
pub fn run(args: LinkArgs, ctx: &Context) -> Result<()> {
    let link = if args.contact {
        contact_link(&ctx.config.messaging)?
    } else if args.social {
        social_link(&ctx.config.social)?
    } else {
        let Some(id) = args.id else {
            bail!("A product id is required unless --contact or --social is given");
        };
        let product = ctx.catalog.require(&ProductId::new(id.trim()))?;
        inquiry_link(&ctx.config.messaging, &product.name)?
    };

    if ctx.output.is_json() {
        ctx.output.json(&link);
    } else {
        println!("{}", link);
    }

    Ok(())
}
