//! Category tabs.

use vitrine_commerce::catalog::Category;
use vitrine_commerce::view::ViewState;

use crate::escape::html_escape;
use crate::query::href_with;

/// Render the category tabs, or nothing while a search is typed.
pub fn render_tabs(state: &ViewState) -> String {
    if !state.tabs_visible() {
        return String::new();
    }

    let tabs: String = Category::ALL
        .iter()
        .map(|&category| {
            let active = category == state.active_category;
            format!(
                r#"<a class="tab{}" href="{}"{}>{}</a>"#,
                if active { " active" } else { "" },
                html_escape(&href_with(state, |s| s.set_category(category))),
                if active { r#" aria-current="page""# } else { "" },
                html_escape(category.label()),
            )
        })
        .collect();

    format!(
        r#"<nav class="category-tabs" data-section="tabs">
    <div class="tabs-row">{}</div>
</nav>"#,
        tabs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_mark_active() {
        let mut state = ViewState::new();
        state.set_category(Category::Xiaomi);
        let html = render_tabs(&state);
        assert!(html.contains(r#"<a class="tab" href="/">Apple 🍎</a>"#));
        assert!(html.contains(r#"<a class="tab active" href="/?cat=xiaomi" aria-current="page">Xiaomi 📱</a>"#));
        assert!(html.contains("Demais Produtos"));
    }

    #[test]
    fn test_tabs_hidden_while_searching() {
        let mut state = ViewState::new();
        state.set_search("x");
        assert!(render_tabs(&state).is_empty());
    }
}
