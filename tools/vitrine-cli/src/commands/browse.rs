//! Interactive storefront session.
//!
//! Each round prints what the page would show for the current
//! [`ViewState`], offers the interactions the page offers in that state,
//! and applies the chosen one as a [`ViewEvent`].

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use vitrine_commerce::catalog::{Catalog, Category, GalleryKey};
use vitrine_commerce::image::{ImageDisplay, ImageSlot, PLACEHOLDER_LABEL};
use vitrine_commerce::links::{contact_link, inquiry_link, social_link};
use vitrine_commerce::view::{ViewEvent, ViewState};
use vitrine_render::{state_href, Storefront};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_bytes, stock_badge};

/// Something the shopper can do from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCategory,
    Search,
    ClearSearch,
    OpenProduct,
    NextImage,
    ChooseImage,
    ShowInquiryLink,
    CloseDetail,
    ToggleSidebar,
    DismissAlert,
    SavePage,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::SelectCategory => "Trocar categoria",
            Action::Search => "Buscar modelo",
            Action::ClearSearch => "Limpar busca",
            Action::OpenProduct => "Ver produto",
            Action::NextImage => "Próxima imagem",
            Action::ChooseImage => "Escolher imagem",
            Action::ShowInquiryLink => "Comprar via WhatsApp",
            Action::CloseDetail => "Fechar detalhes",
            Action::ToggleSidebar => "Menu",
            Action::DismissAlert => "Fechar aviso de preços",
            Action::SavePage => "Salvar página HTML",
            Action::Quit => "Sair",
        }
    }
}

/// Actions offered for `state`, in menu order.
///
/// With the overlay open the listing behind it is locked, so only overlay
/// actions and the sidebar toggle are offered.
pub fn available_actions(state: &ViewState, catalog: &Catalog) -> Vec<Action> {
    if state.selected_product(catalog).is_some() {
        return vec![
            Action::NextImage,
            Action::ChooseImage,
            Action::ShowInquiryLink,
            Action::ToggleSidebar,
            Action::CloseDetail,
            Action::Quit,
        ];
    }

    let mut actions = Vec::new();
    if !state.visible_products(catalog).is_empty() {
        actions.push(Action::OpenProduct);
    }
    if state.tabs_visible() {
        actions.push(Action::SelectCategory);
    }
    actions.push(Action::Search);
    if !state.search_text.is_empty() {
        actions.push(Action::ClearSearch);
    }
    actions.push(Action::ToggleSidebar);
    if state.alert_visible() {
        actions.push(Action::DismissAlert);
    }
    actions.push(Action::SavePage);
    actions.push(Action::Quit);
    actions
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let theme = ColorfulTheme::default();
    let breakpoint = ctx.config.display.sidebar_breakpoint_px;
    let mut state = ViewState::new();
    state.set_category(args.category.parse::<Category>()?);

    ctx.output.header(&ctx.config.store.name);
    ctx.output.info(&ctx.config.store.marquee);

    loop {
        print_state(&state, ctx);

        let actions = available_actions(&state, &ctx.catalog);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("O que deseja fazer?")
            .items(&labels)
            .default(0)
            .interact()?;

        let event = match actions[choice] {
            Action::Quit => break,
            Action::SavePage => {
                save_page(&state, &args.output, ctx)?;
                continue;
            }
            Action::ShowInquiryLink => {
                if let Some(product) = state.selected_product(&ctx.catalog) {
                    let link = inquiry_link(&ctx.config.messaging, &product.name)?;
                    ctx.output.success(&link.url);
                }
                continue;
            }
            Action::NextImage => {
                if let Some(product) = state.selected_product(&ctx.catalog) {
                    state.next_image(product);
                }
                continue;
            }
            Action::SelectCategory => {
                let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                let current = Category::ALL
                    .iter()
                    .position(|c| *c == state.active_category)
                    .unwrap_or(0);
                let picked = Select::with_theme(&theme)
                    .with_prompt("Categoria")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                ViewEvent::SelectCategory(Category::ALL[picked])
            }
            Action::Search => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Buscar modelo")
                    .with_initial_text(state.search_text.clone())
                    .allow_empty(true)
                    .interact_text()?;
                ViewEvent::Search(text)
            }
            Action::ClearSearch => ViewEvent::ClearSearch,
            Action::OpenProduct => {
                let visible = state.visible_products(&ctx.catalog);
                let items: Vec<String> = visible
                    .iter()
                    .map(|p| format!("{}  {}", p.name, p.final_price.display()))
                    .collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Produto")
                    .items(&items)
                    .default(0)
                    .interact()?;
                ViewEvent::OpenProduct(visible[picked].id.clone())
            }
            Action::ChooseImage => {
                let labels: Vec<&str> = GalleryKey::ALL.iter().map(|k| k.label()).collect();
                let current = GalleryKey::ALL
                    .iter()
                    .position(|k| *k == state.gallery_image_key)
                    .unwrap_or(0);
                let picked = Select::with_theme(&theme)
                    .with_prompt("Imagem")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                ViewEvent::ShowImage(GalleryKey::ALL[picked])
            }
            Action::CloseDetail => ViewEvent::CloseDetail,
            Action::ToggleSidebar => ViewEvent::ToggleSidebar,
            Action::DismissAlert => ViewEvent::DismissAlert,
        };

        ctx.output.debug(&format!("event: {}", event.as_str()));
        state.apply_with_breakpoint(event, breakpoint);
    }

    ctx.output.info(&format!("Última página: {}", state_href(&state)));
    Ok(())
}

fn print_state(state: &ViewState, ctx: &Context) {
    if state.alert_visible() {
        ctx.output.warn(&format!(
            "Preços atualizados em {}",
            ctx.config.display.prices_updated_label()
        ));
    }

    if state.sidebar_open {
        ctx.output.header("Menu");
        match contact_link(&ctx.config.messaging) {
            Ok(link) => ctx.output.kv("WhatsApp Vendas", &link.url),
            Err(e) => ctx.output.warn(&format!("WhatsApp Vendas: {}", e)),
        }
        match social_link(&ctx.config.social) {
            Ok(link) => ctx.output.kv("Instagram Oficial", &link.url),
            Err(e) => ctx.output.warn(&format!("Instagram Oficial: {}", e)),
        }
    }

    if let Some(product) = state.selected_product(&ctx.catalog) {
        ctx.output.header(&product.name);
        ctx.output.kv("de", &product.detail_compare_at_price().display());
        ctx.output.kv("por", &product.final_price.display());
        ctx.output.kv(
            "stock",
            &stock_badge(product.stock_status.label(), product.stock_status.css_class()),
        );
        if let Some(message) = product.scarcity_message() {
            ctx.output.warn(&message);
        }
        let slot = ImageSlot::new(
            product
                .images
                .get(state.gallery_image_key)
                .unwrap_or_default(),
        );
        let shown = match slot.display() {
            ImageDisplay::Image(src) => src.to_string(),
            ImageDisplay::Placeholder => format!("({})", PLACEHOLDER_LABEL),
        };
        ctx.output.kv(state.gallery_image_key.label(), &shown);
        return;
    }

    let query = state.listing_query();
    if query.is_searching() {
        ctx.output.header(&format!("Busca: {}", state.search_text.trim()));
    } else {
        ctx.output.header(state.active_category.label());
    }

    let visible = state.visible_products(&ctx.catalog);
    if visible.is_empty() {
        ctx.output.info("Nenhum produto encontrado.");
    }
    for product in visible {
        ctx.output.list_item(&format!(
            "{}  {}",
            product.name,
            product.final_price.display()
        ));
    }
}

fn save_page(state: &ViewState, output: &str, ctx: &Context) -> Result<()> {
    let html = Storefront::new(&ctx.catalog, &ctx.config).render_page(state)?;
    let path = ctx.resolve_path(output);
    fs::write(&path, &html)
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    ctx.output.success(&format!(
        "Wrote {} ({})",
        path.display(),
        format_bytes(html.len())
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::ProductId;

    #[test]
    fn test_front_page_actions() {
        let catalog = Catalog::builtin();
        let state = ViewState::new();
        let actions = available_actions(&state, &catalog);
        assert_eq!(actions[0], Action::OpenProduct);
        assert!(actions.contains(&Action::SelectCategory));
        assert!(actions.contains(&Action::DismissAlert));
        assert!(!actions.contains(&Action::ClearSearch));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }

    #[test]
    fn test_search_hides_category_choice() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new();
        state.apply(ViewEvent::Search("zzz".into()));
        state.apply(ViewEvent::DismissAlert);
        let actions = available_actions(&state, &catalog);
        assert!(!actions.contains(&Action::OpenProduct));
        assert!(!actions.contains(&Action::SelectCategory));
        assert!(!actions.contains(&Action::DismissAlert));
        assert!(actions.contains(&Action::ClearSearch));
    }

    #[test]
    fn test_overlay_actions() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new();
        state.apply(ViewEvent::OpenProduct(ProductId::new("iphone-16-128gb")));
        let actions = available_actions(&state, &catalog);
        assert_eq!(
            actions,
            vec![
                Action::NextImage,
                Action::ChooseImage,
                Action::ShowInquiryLink,
                Action::ToggleSidebar,
                Action::CloseDetail,
                Action::Quit,
            ]
        );

        // The sidebar opens behind the overlay without closing it.
        state.apply(ViewEvent::ToggleSidebar);
        assert!(state.sidebar_open);
        assert!(state.selected_product(&catalog).is_some());
        assert!(available_actions(&state, &catalog).contains(&Action::CloseDetail));

        // An id that is not in the catalog leaves the listing usable.
        state.apply(ViewEvent::OpenProduct(ProductId::new("nokia-3310")));
        assert!(available_actions(&state, &catalog).contains(&Action::OpenProduct));
    }
}
