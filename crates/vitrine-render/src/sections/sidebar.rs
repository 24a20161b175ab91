//! Slide-out contact menu.

use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::links::{contact_link, social_link};
use vitrine_commerce::view::ViewState;
use vitrine_commerce::CommerceError;

use crate::escape::html_escape;
use crate::query::href_with;

/// Render the sidebar. It is always in the document; `open` toggles it.
pub fn render_sidebar(state: &ViewState, config: &StoreConfig) -> Result<String, CommerceError> {
    let contact = contact_link(&config.messaging)?;
    let social = social_link(&config.social)?;
    let close_href = html_escape(&href_with(state, |s| s.close_sidebar()));

    let backdrop = if state.sidebar_open {
        format!(
            r#"<a class="sidebar-backdrop" href="{}" aria-label="Fechar menu"></a>"#,
            close_href
        )
    } else {
        String::new()
    };

    Ok(format!(
        r#"<aside class="sidebar{open}" data-section="sidebar" aria-hidden="{hidden}">
    <div class="sidebar-header">
        <h2>Menu</h2>
        <a class="sidebar-close" href="{close_href}" aria-label="Fechar menu">&times;</a>
    </div>
    <nav class="sidebar-links">
        <a class="sidebar-link whatsapp" {contact}>WhatsApp Vendas</a>
        <a class="sidebar-link instagram" {social}>Instagram Oficial</a>
    </nav>
</aside>
{backdrop}"#,
        open = if state.sidebar_open { " open" } else { "" },
        hidden = !state.sidebar_open,
        close_href = close_href,
        contact = contact.anchor_attrs(),
        social = social.anchor_attrs(),
        backdrop = backdrop,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_sidebar() {
        let html = render_sidebar(&ViewState::new(), &StoreConfig::default()).unwrap();
        assert!(html.contains(r#"<aside class="sidebar" data-section="sidebar" aria-hidden="true">"#));
        assert!(!html.contains("sidebar-backdrop"));
        assert!(html.contains(r#"href="https://wa.me/5511960817540" target="_blank" rel="noopener""#));
        assert!(html.contains(r#"href="https://www.instagram.com/wbimportadoss/""#));
    }

    #[test]
    fn test_open_sidebar() {
        let mut state = ViewState::new();
        state.open_sidebar();
        let html = render_sidebar(&state, &StoreConfig::default()).unwrap();
        assert!(html.contains(r#"class="sidebar open""#));
        assert!(html.contains(r#"<a class="sidebar-backdrop" href="/""#));
    }
}
