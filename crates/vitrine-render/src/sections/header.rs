//! Marquee banner and page header with the search box.

use vitrine_commerce::catalog::Category;
use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::image::ImageSlot;
use vitrine_commerce::view::ViewState;

use super::render_safe_image;
use crate::escape::html_escape;
use crate::query::{href_with, PAGE_PATH};

/// Placeholder text of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Buscar modelo...";

/// Render the scrolling banner.
pub fn render_marquee(config: &StoreConfig) -> String {
    format!(
        r#"<div class="marquee" data-section="marquee">
    <div class="marquee-track"><span>{}</span></div>
</div>"#,
        html_escape(&config.store.marquee)
    )
}

/// Render the header: menu button, branding and search form.
pub fn render_header(state: &ViewState, config: &StoreConfig) -> String {
    let mascot = if config.display.mascot_url.trim().is_empty() {
        String::new()
    } else {
        render_safe_image(
            &ImageSlot::new(config.display.mascot_url.as_str()),
            &config.store.name,
            "mascot",
        )
    };

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="header-bar">
        <a class="menu-button" href="{menu_href}" aria-label="Abrir menu">&#9776;</a>
        <div class="brand">
            <h1>{name}</h1>
            <p class="tagline">{tagline}</p>
        </div>
        {mascot}
    </div>
    {search}
</header>"#,
        menu_href = html_escape(&href_with(state, |s| s.open_sidebar())),
        name = html_escape(&config.store.name),
        tagline = html_escape(&config.store.tagline),
        mascot = mascot,
        search = render_search_form(state),
    )
}

/// GET form that replaces the search text and keeps the rest of the state.
fn render_search_form(state: &ViewState) -> String {
    let mut hidden = String::new();
    if state.active_category != Category::default() {
        hidden.push_str(&hidden_input("cat", state.active_category.as_str()));
    }
    if state.sidebar_open {
        hidden.push_str(&hidden_input("menu", "1"));
    }
    if state.alert_dismissed {
        hidden.push_str(&hidden_input("alert", "0"));
    }

    let clear = if state.search_text.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a class="search-clear" href="{}" aria-label="Limpar busca">&times;</a>"#,
            html_escape(&href_with(state, |s| s.clear_search()))
        )
    };

    format!(
        r#"<form class="search-form" action="{action}" method="GET" role="search">
        <input type="search" name="q" value="{value}" placeholder="{placeholder}" aria-label="Buscar">
        {hidden}{clear}
        <button type="submit">Buscar</button>
    </form>"#,
        action = PAGE_PATH,
        value = html_escape(&state.search_text),
        placeholder = SEARCH_PLACEHOLDER,
        hidden = hidden,
        clear = clear,
    )
}

fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        name,
        html_escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_branding() {
        let html = render_header(&ViewState::new(), &StoreConfig::default());
        assert!(html.contains("<h1>WBimportadoss</h1>"));
        assert!(html.contains("originais importados"));
        assert!(html.contains(r#"href="/?menu=1""#));
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert!(!html.contains("mascot"));
    }

    #[test]
    fn test_search_form_keeps_state() {
        let mut state = ViewState::new();
        state.set_category(Category::Xiaomi);
        state.set_search("poco <x>");
        state.dismiss_alert();
        let html = render_header(&state, &StoreConfig::default());
        assert!(html.contains(r#"value="poco &lt;x&gt;""#));
        assert!(html.contains(r#"<input type="hidden" name="cat" value="xiaomi">"#));
        assert!(html.contains(r#"<input type="hidden" name="alert" value="0">"#));
        assert!(html.contains(r#"class="search-clear" href="/?cat=xiaomi&amp;alert=0""#));
    }

    #[test]
    fn test_marquee() {
        let html = render_marquee(&StoreConfig::default());
        assert!(html.contains("PARCELAMOS!"));
    }
}
