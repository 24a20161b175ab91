//! Product grid.

use vitrine_commerce::catalog::Product;
use vitrine_commerce::image::ImageSlot;
use vitrine_commerce::view::ViewState;

use super::render_safe_image;
use crate::escape::html_escape;
use crate::query::href_with;

/// Render the visible products as cards.
pub fn render_grid(products: &[&Product], state: &ViewState) -> String {
    if products.is_empty() {
        return render_grid_empty(state);
    }

    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, state))
        .collect();

    format!(
        r#"<main class="product-listing" data-section="grid">
    <div class="product-grid">
        {}
    </div>
</main>"#,
        cards
    )
}

fn render_product_card(product: &Product, state: &ViewState) -> String {
    let front = ImageSlot::new(product.images.front.as_str());
    let id = product.id.clone();
    let href = href_with(state, move |s| s.select_product(id));

    let scarcity = product
        .scarcity_message()
        .map(|msg| format!(r#"<p class="scarcity">{}</p>"#, html_escape(&msg)))
        .unwrap_or_default();

    format!(
        r#"<a class="product-card" href="{href}" data-product-id="{id}">
            {image}
            <div class="card-body">
                <h3 class="product-title">{name}</h3>
                {scarcity}
                <div class="card-footer">
                    <div class="card-prices">
                        <p class="price-compare">{compare}</p>
                        <p class="price-final">{price}</p>
                    </div>
                    <span class="card-arrow" aria-hidden="true">&rarr;</span>
                </div>
            </div>
        </a>"#,
        href = html_escape(&href),
        id = html_escape(product.id.as_str()),
        image = render_safe_image(&front, &product.name, "card-image"),
        name = html_escape(&product.name),
        scarcity = scarcity,
        compare = product.card_compare_at_price().display(),
        price = product.final_price.display(),
    )
}

/// Render the grid when nothing matches.
pub fn render_grid_empty(state: &ViewState) -> String {
    let message = if state.listing_query().is_searching() {
        format!(
            "Nenhum produto encontrado para &quot;{}&quot;.",
            html_escape(state.search_text.trim())
        )
    } else {
        "Nenhum produto nesta categoria no momento.".to_string()
    };

    format!(
        r#"<main class="product-listing empty" data-section="grid">
    <p class="empty-state">{}</p>
</main>"#,
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::catalog::Category;
    use vitrine_commerce::money::Money;

    #[test]
    fn test_card_prices_and_link() {
        let mut product = Product::new("iPhone 16 128GB", Category::Iphone, Money::brl(5200.0));
        product.available_quantity = 2;
        let html = render_grid(&[&product], &ViewState::new());

        assert!(html.contains(r#"href="/?product=iphone-16-128gb""#));
        assert!(html.contains("R$\u{a0}6.240,00"));
        assert!(html.contains("R$\u{a0}5.200,00"));
        assert!(html.contains("Restam apenas 2 unidades!"));
        // No front image: placeholder from the start.
        assert!(html.contains("safe-image failed card-image"));
    }

    #[test]
    fn test_empty_states() {
        let mut state = ViewState::new();
        state.set_category(Category::Demais);
        assert!(render_grid(&[], &state).contains("Nenhum produto nesta categoria"));

        state.set_search("zzz");
        assert!(render_grid(&[], &state).contains("&quot;zzz&quot;"));
    }
}
