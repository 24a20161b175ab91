//! Full page assembly.

use std::time::Instant;

use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::view::ViewState;
use vitrine_commerce::CommerceError;

use crate::sections::{
    render_alert, render_detail, render_floating_cta, render_footer, render_grid, render_header,
    render_marquee, render_sidebar, render_tabs,
};
use crate::shell::{HeadContent, Shell};
use crate::styles::{sidebar_breakpoint_styles, STOREFRONT_STYLES};

/// A named, rendered part of the page. Empty `html` means the section is
/// absent for this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub name: &'static str,
    pub html: String,
}

impl RenderedSection {
    fn new(name: &'static str, html: String) -> Self {
        Self { name, html }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Renders the storefront for a catalog and store configuration.
#[derive(Debug, Clone, Copy)]
pub struct Storefront<'a> {
    catalog: &'a Catalog,
    config: &'a StoreConfig,
}

impl<'a> Storefront<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a StoreConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &'a StoreConfig {
        self.config
    }

    /// Document shell for `state`. The title follows the overlay and search.
    pub fn create_shell(&self, state: &ViewState) -> Shell {
        let store = &self.config.store;
        let selected = state.selected_product(self.catalog);
        let title = if let Some(product) = selected {
            format!("{} | {}", product.name, store.name)
        } else if state.listing_query().is_searching() {
            format!("Busca: {} | {}", state.search_text.trim(), store.name)
        } else {
            format!("{} | {}", store.name, store.tagline)
        };

        let head = HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &store.marquee)
            .with_style(STOREFRONT_STYLES)
            .with_style(&sidebar_breakpoint_styles(
                self.config.display.sidebar_breakpoint_px,
            ));

        let mut body_classes = Vec::new();
        if selected.is_some() {
            body_classes.push("locked");
        }
        if state.sidebar_open {
            body_classes.push("menu-open");
        }
        let body_start = if body_classes.is_empty() {
            "<body>\n".to_string()
        } else {
            format!("<body class=\"{}\">\n", body_classes.join(" "))
        };

        Shell::new(head).with_body_start(body_start)
    }

    /// Every section in document order.
    pub fn render_sections(&self, state: &ViewState) -> Result<Vec<RenderedSection>, CommerceError> {
        let visible = state.visible_products(self.catalog);
        let selected = state.selected_product(self.catalog);
        if state.detail_open() && selected.is_none() {
            tracing::debug!(
                product = state.selected_product.as_ref().map(|id| id.as_str()),
                "selected product not in catalog, overlay skipped"
            );
        }

        Ok(vec![
            RenderedSection::new("alert", render_alert(state, self.config)),
            RenderedSection::new("marquee", render_marquee(self.config)),
            RenderedSection::new("sidebar", render_sidebar(state, self.config)?),
            RenderedSection::new("header", render_header(state, self.config)),
            RenderedSection::new("tabs", render_tabs(state)),
            RenderedSection::new("grid", render_grid(&visible, state)),
            RenderedSection::new("detail", render_detail(selected, state, self.config)?),
            RenderedSection::new("cta", render_floating_cta(self.config)?),
            RenderedSection::new("footer", render_footer(self.config)),
        ])
    }

    /// The complete HTML document for `state`.
    pub fn render_page(&self, state: &ViewState) -> Result<String, CommerceError> {
        let started = Instant::now();
        let shell = self.create_shell(state);
        let sections = self.render_sections(state)?;

        let mut html = shell.render_opening();
        for section in sections.iter().filter(|s| !s.is_empty()) {
            html.push_str(&section.html);
            html.push('\n');
        }
        html.push_str(&shell.render_closing());

        tracing::debug!(
            sections = sections.iter().filter(|s| !s.is_empty()).count(),
            bytes = html.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "rendered storefront page"
        );

        Ok(html)
    }
}

/// Render the complete page for `state`.
pub fn render_page(
    catalog: &Catalog,
    state: &ViewState,
    config: &StoreConfig,
) -> Result<String, CommerceError> {
    Storefront::new(catalog, config).render_page(state)
}
