//! View state carried in the page URL.
//!
//! | key       | meaning                         | default  |
//! |-----------|---------------------------------|----------|
//! | `cat`     | active category                 | `iphone` |
//! | `q`       | search text as typed            | empty    |
//! | `product` | product in the detail overlay   | none     |
//! | `img`     | gallery key (overlay only)      | `front`  |
//! | `menu`    | `1` when the sidebar is open    | closed   |
//! | `alert`   | `0` once the alert is dismissed | shown    |
//! | `w`       | viewport width hint in px       | none     |
//!
//! Unknown keys and unparseable values fall back to the defaults.

use std::str::FromStr;

use url::form_urlencoded;
use vitrine_commerce::catalog::{Category, GalleryKey};
use vitrine_commerce::view::ViewState;
use vitrine_commerce::ProductId;

/// Path the storefront page is served from.
pub const PAGE_PATH: &str = "/";

/// A decoded page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub state: ViewState,
    /// Viewport width reported by the client, if any.
    pub viewport_width: Option<u32>,
}

impl PageQuery {
    /// Parse from a URL query string, with or without the leading `?`.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut category = None;
        let mut search = None;
        let mut product = None;
        let mut image = None;
        let mut menu = false;
        let mut alert_dismissed = false;
        let mut viewport_width = None;

        for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                "cat" => category = Category::from_str(&value).ok(),
                "q" => search = Some(value.into_owned()),
                "product" if !value.trim().is_empty() => {
                    product = Some(ProductId::new(value.trim()))
                }
                "img" => image = GalleryKey::from_str(&value).ok(),
                "menu" => menu = value == "1",
                "alert" => alert_dismissed = value == "0",
                "w" => viewport_width = value.trim().parse().ok(),
                _ => {}
            }
        }

        let mut state = ViewState::new();
        if let Some(category) = category {
            state.set_category(category);
        }
        if let Some(search) = search {
            state.set_search(search);
        }
        if let Some(id) = product {
            state.select_product(id);
        }
        if let Some(key) = image {
            state.show_image(key);
        }
        if menu {
            state.open_sidebar();
        }
        if alert_dismissed {
            state.dismiss_alert();
        }

        Self {
            state,
            viewport_width,
        }
    }

    /// The state to render, after applying the viewport hint.
    pub fn into_state(self, sidebar_breakpoint: u32) -> ViewState {
        let mut state = self.state;
        if let Some(width) = self.viewport_width {
            state.viewport_resized(width, sidebar_breakpoint);
        }
        state
    }
}

/// Encode the non-default parts of `state` as a query string (no `?`).
pub fn to_query_string(state: &ViewState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if state.active_category != Category::default() {
        serializer.append_pair("cat", state.active_category.as_str());
    }
    if !state.search_text.is_empty() {
        serializer.append_pair("q", &state.search_text);
    }
    if let Some(id) = &state.selected_product {
        serializer.append_pair("product", id.as_str());
        if state.gallery_image_key != GalleryKey::Front {
            serializer.append_pair("img", state.gallery_image_key.as_str());
        }
    }
    if state.sidebar_open {
        serializer.append_pair("menu", "1");
    }
    if state.alert_dismissed {
        serializer.append_pair("alert", "0");
    }

    serializer.finish()
}

/// Page URL (path and query) that renders `state`.
pub fn state_href(state: &ViewState) -> String {
    let query = to_query_string(state);
    if query.is_empty() {
        PAGE_PATH.to_string()
    } else {
        format!("{}?{}", PAGE_PATH, query)
    }
}

/// Page URL for the state reached from `state` through `transition`.
pub fn href_with(state: &ViewState, transition: impl FnOnce(&mut ViewState)) -> String {
    let mut next = state.clone();
    transition(&mut next);
    state_href(&next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        let query = PageQuery::from_query_string("");
        assert_eq!(query.state, ViewState::new());
        assert_eq!(query.viewport_width, None);
        assert_eq!(state_href(&query.state), "/");
    }

    #[test]
    fn test_parse_full_query() {
        let query = PageQuery::from_query_string(
            "?cat=xiaomi&q=redmi+13c&product=redmi-13c-8%2F256gb&img=back&menu=1&alert=0&w=500",
        );
        let state = &query.state;
        assert_eq!(state.active_category, Category::Xiaomi);
        assert_eq!(state.search_text, "redmi 13c");
        assert_eq!(
            state.selected_product,
            Some(ProductId::new("redmi-13c-8/256gb"))
        );
        assert_eq!(state.gallery_image_key, GalleryKey::Back);
        assert!(state.sidebar_open);
        assert!(state.alert_dismissed);
        assert_eq!(query.viewport_width, Some(500));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let query = PageQuery::from_query_string("cat=nokia&img=top&menu=yes&alert=1&w=wide&x=1");
        assert_eq!(query.state, ViewState::new());
        assert_eq!(query.viewport_width, None);
    }

    #[test]
    fn test_image_without_product_is_front() {
        let query = PageQuery::from_query_string("img=side");
        assert_eq!(query.state.gallery_image_key, GalleryKey::Front);
    }

    #[test]
    fn test_wide_viewport_closes_sidebar() {
        let state = PageQuery::from_query_string("menu=1&w=1024").into_state(768);
        assert!(!state.sidebar_open);
        let state = PageQuery::from_query_string("menu=1&w=400").into_state(768);
        assert!(state.sidebar_open);
    }

    #[test]
    fn test_encode_decode() {
        let mut state = ViewState::new();
        state.set_category(Category::Demais);
        state.set_search("Olá & tchau");
        state.select_product(ProductId::new("poco-c85"));
        state.show_image(GalleryKey::Side);
        state.dismiss_alert();

        let href = state_href(&state);
        assert!(href.starts_with("/?cat=demais&q=Ol%C3%A1+%26+tchau&product=poco-c85&img=side"));
        assert_eq!(PageQuery::from_query_string(&href[2..]).state, state);
    }

    #[test]
    fn test_href_with() {
        let state = ViewState::new();
        assert_eq!(href_with(&state, |s| s.open_sidebar()), "/?menu=1");
        assert_eq!(state_href(&state), "/");
    }
}
