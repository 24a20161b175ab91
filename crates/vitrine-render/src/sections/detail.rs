//! Product detail overlay.

use vitrine_commerce::catalog::{GalleryKey, Product};
use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::image::ImageSlot;
use vitrine_commerce::links::inquiry_link;
use vitrine_commerce::view::ViewState;
use vitrine_commerce::CommerceError;

use super::render_safe_image;
use crate::escape::html_escape;
use crate::query::href_with;

/// Render the overlay for the selected product, or nothing when closed.
pub fn render_detail(
    product: Option<&Product>,
    state: &ViewState,
    config: &StoreConfig,
) -> Result<String, CommerceError> {
    let Some(product) = product else {
        return Ok(String::new());
    };

    let close_href = html_escape(&href_with(state, |s| s.close_detail()));
    let inquiry = inquiry_link(&config.messaging, &product.name)?;

    Ok(format!(
        r#"<div class="detail-overlay" data-section="detail" role="dialog" aria-modal="true" aria-labelledby="detail-title">
    <a class="overlay-backdrop" href="{close_href}" aria-label="Fechar"></a>
    <div class="detail-panel">
        <a class="detail-close" href="{close_href}" aria-label="Fechar">&times;</a>
        {gallery}
        <div class="detail-info">
            <h2 id="detail-title">{name}</h2>
            <p class="detail-description">{description}</p>
            {stock}
            {colors}
            {specs}
            <div class="detail-buy">
                <p class="price-compare">De: {compare}</p>
                <p class="price-final">{price}</p>
                <a class="buy-button" {inquiry}>Comprar via WhatsApp</a>
            </div>
        </div>
    </div>
</div>"#,
        close_href = close_href,
        gallery = render_gallery(product, state),
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        stock = render_stock(product),
        colors = render_colors(product),
        specs = render_specs(product),
        compare = product.detail_compare_at_price().display(),
        price = product.final_price.display(),
        inquiry = inquiry.anchor_attrs(),
    ))
}

/// Main image for the gallery cursor plus a thumbnail per available angle.
fn render_gallery(product: &Product, state: &ViewState) -> String {
    let key = state.gallery_image_key;
    let main = ImageSlot::new(product.images.get(key).unwrap_or_default());

    let thumbs: String = product
        .images
        .available_keys()
        .into_iter()
        .map(|thumb_key| render_thumb(product, state, thumb_key))
        .collect();

    format!(
        r#"<div class="detail-gallery" data-image-key="{key}">
            {main}
            <div class="gallery-thumbs">{thumbs}</div>
        </div>"#,
        key = key.as_str(),
        main = render_safe_image(&main, &product.name, "gallery-main"),
        thumbs = thumbs,
    )
}

fn render_thumb(product: &Product, state: &ViewState, key: GalleryKey) -> String {
    let slot = ImageSlot::new(product.images.get(key).unwrap_or_default());
    format!(
        r#"<a class="thumb{active}" href="{href}" aria-label="{label}">{image}</a>"#,
        active = if key == state.gallery_image_key {
            " active"
        } else {
            ""
        },
        href = html_escape(&href_with(state, |s| s.show_image(key))),
        label = key.label(),
        image = render_safe_image(&slot, key.label(), "thumb-image"),
    )
}

fn render_stock(product: &Product) -> String {
    let scarcity = product
        .scarcity_message()
        .map(|msg| format!(r#" <span class="scarcity">{}</span>"#, html_escape(&msg)))
        .unwrap_or_default();
    format!(
        r#"<p class="stock {}">{}{}</p>"#,
        product.stock_status.css_class(),
        product.stock_status.label(),
        scarcity
    )
}

fn render_colors(product: &Product) -> String {
    if product.colors.is_empty() {
        return String::new();
    }
    let swatches: String = product
        .color_swatches()
        .iter()
        .map(|swatch| {
            format!(
                r#"<li class="swatch {}"><span class="swatch-dot"></span>{}</li>"#,
                swatch.css_class,
                html_escape(swatch.name)
            )
        })
        .collect();
    format!(r#"<ul class="detail-colors">{}</ul>"#, swatches)
}

fn render_specs(product: &Product) -> String {
    if product.specs.is_empty() {
        return String::new();
    }
    let items: String = product
        .specs
        .iter()
        .map(|spec| format!("<li>{}</li>", html_escape(spec)))
        .collect();
    format!(r#"<ul class="detail-specs">{}</ul>"#, items)
}
