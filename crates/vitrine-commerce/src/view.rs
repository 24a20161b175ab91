//! Storefront view state.
//!
//! A single owner holds the transient UI state and derives the visible
//! listing from the catalog on demand. No transition can fail.

use crate::catalog::{Catalog, Category, GalleryKey, Product};
use crate::config::DEFAULT_SIDEBAR_BREAKPOINT_PX;
use crate::ids::ProductId;
use crate::search::ListingQuery;
use serde::{Deserialize, Serialize};

/// Transient UI state of the storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Active category tab.
    pub active_category: Category,
    /// Raw search text as typed.
    pub search_text: String,
    /// Product shown in the detail overlay, if open.
    pub selected_product: Option<ProductId>,
    /// Gallery cursor; `Front` whenever the overlay is closed.
    pub gallery_image_key: GalleryKey,
    pub sidebar_open: bool,
    /// Once set, never cleared.
    pub alert_dismissed: bool,
}

/// User input that drives a [`ViewState`] transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    SelectCategory(Category),
    Search(String),
    ClearSearch,
    OpenProduct(ProductId),
    CloseDetail,
    ShowImage(GalleryKey),
    OpenSidebar,
    CloseSidebar,
    ToggleSidebar,
    ViewportResized { width: u32 },
    DismissAlert,
}

impl ViewEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewEvent::SelectCategory(_) => "select_category",
            ViewEvent::Search(_) => "search",
            ViewEvent::ClearSearch => "clear_search",
            ViewEvent::OpenProduct(_) => "open_product",
            ViewEvent::CloseDetail => "close_detail",
            ViewEvent::ShowImage(_) => "show_image",
            ViewEvent::OpenSidebar => "open_sidebar",
            ViewEvent::CloseSidebar => "close_sidebar",
            ViewEvent::ToggleSidebar => "toggle_sidebar",
            ViewEvent::ViewportResized { .. } => "viewport_resized",
            ViewEvent::DismissAlert => "dismiss_alert",
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Initial state: iPhone tab, no search, nothing selected.
    pub fn new() -> Self {
        Self {
            active_category: Category::Iphone,
            search_text: String::new(),
            selected_product: None,
            gallery_image_key: GalleryKey::Front,
            sidebar_open: false,
            alert_dismissed: false,
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Open the detail overlay. The gallery always starts at the front.
    pub fn select_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
        self.gallery_image_key = GalleryKey::Front;
    }

    /// Close the detail overlay and rewind the gallery.
    pub fn close_detail(&mut self) {
        self.selected_product = None;
        self.gallery_image_key = GalleryKey::Front;
    }

    /// Move the gallery cursor. Ignored while the overlay is closed.
    pub fn show_image(&mut self, key: GalleryKey) {
        if self.selected_product.is_some() {
            self.gallery_image_key = key;
        }
    }

    /// Advance the gallery to the next angle of `product` that has an image,
    /// wrapping around.
    pub fn next_image(&mut self, product: &Product) {
        let keys = product.images.available_keys();
        if keys.is_empty() {
            return;
        }
        let next = match keys.iter().position(|k| *k == self.gallery_image_key) {
            Some(i) => keys[(i + 1) % keys.len()],
            None => keys[0],
        };
        self.show_image(next);
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Collapse the sidebar once the viewport reaches the desktop breakpoint.
    pub fn viewport_resized(&mut self, width: u32, breakpoint: u32) {
        if width >= breakpoint {
            self.sidebar_open = false;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_dismissed = true;
    }

    /// Apply an event using the default sidebar breakpoint.
    pub fn apply(&mut self, event: ViewEvent) {
        self.apply_with_breakpoint(event, DEFAULT_SIDEBAR_BREAKPOINT_PX);
    }

    /// Apply an event; `breakpoint` is used for viewport resizes.
    pub fn apply_with_breakpoint(&mut self, event: ViewEvent, breakpoint: u32) {
        let name = event.as_str();
        match event {
            ViewEvent::SelectCategory(category) => self.set_category(category),
            ViewEvent::Search(text) => self.set_search(text),
            ViewEvent::ClearSearch => self.clear_search(),
            ViewEvent::OpenProduct(id) => self.select_product(id),
            ViewEvent::CloseDetail => self.close_detail(),
            ViewEvent::ShowImage(key) => self.show_image(key),
            ViewEvent::OpenSidebar => self.open_sidebar(),
            ViewEvent::CloseSidebar => self.close_sidebar(),
            ViewEvent::ToggleSidebar => self.toggle_sidebar(),
            ViewEvent::ViewportResized { width } => self.viewport_resized(width, breakpoint),
            ViewEvent::DismissAlert => self.dismiss_alert(),
        }

        tracing::debug!(
            event = name,
            category = %self.active_category,
            searching = !self.search_text.trim().is_empty(),
            selected = self.selected_product.as_ref().map(|id| id.as_str()),
            image = self.gallery_image_key.as_str(),
            sidebar_open = self.sidebar_open,
            alert_dismissed = self.alert_dismissed,
            "view transition"
        );
    }

    /// The listing query implied by this state.
    pub fn listing_query(&self) -> ListingQuery {
        ListingQuery::new(self.active_category).with_text(self.search_text.clone())
    }

    /// Products to show in the grid.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.listing_query().apply(catalog.products())
    }

    /// The product in the overlay, if it is open and the id resolves.
    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.selected_product.as_ref().and_then(|id| catalog.get(id))
    }

    /// Category tabs are hidden while anything is typed in the search box.
    pub fn tabs_visible(&self) -> bool {
        self.search_text.is_empty()
    }

    pub fn alert_visible(&self) -> bool {
        !self.alert_dismissed
    }

    /// Whether the overlay is open.
    pub fn detail_open(&self) -> bool {
        self.selected_product.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductImages;
    use crate::money::Money;

    fn phone(side: &str) -> Product {
        let mut product = Product::new("iPhone 16 128GB", Category::Iphone, Money::brl(5200.0));
        product.images = ProductImages {
            front: "front.jpg".into(),
            side: side.into(),
            back: "back.jpg".into(),
        };
        product
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_category, Category::Iphone);
        assert!(state.search_text.is_empty());
        assert!(state.selected_product.is_none());
        assert_eq!(state.gallery_image_key, GalleryKey::Front);
        assert!(!state.sidebar_open);
        assert!(state.alert_visible());
        assert!(state.tabs_visible());
    }

    #[test]
    fn test_select_resets_gallery() {
        let mut state = ViewState::new();
        state.select_product(ProductId::new("a"));
        state.show_image(GalleryKey::Back);
        assert_eq!(state.gallery_image_key, GalleryKey::Back);

        state.select_product(ProductId::new("b"));
        assert_eq!(state.gallery_image_key, GalleryKey::Front);
    }

    #[test]
    fn test_close_resets_gallery() {
        let mut state = ViewState::new();
        state.select_product(ProductId::new("a"));
        state.show_image(GalleryKey::Side);
        state.close_detail();
        assert!(!state.detail_open());
        assert_eq!(state.gallery_image_key, GalleryKey::Front);
    }

    #[test]
    fn test_show_image_ignored_when_closed() {
        let mut state = ViewState::new();
        state.show_image(GalleryKey::Back);
        assert_eq!(state.gallery_image_key, GalleryKey::Front);
    }

    #[test]
    fn test_next_image_skips_empty_angles() {
        let product = phone("");
        let mut state = ViewState::new();
        state.select_product(product.id.clone());

        state.next_image(&product);
        assert_eq!(state.gallery_image_key, GalleryKey::Back);
        state.next_image(&product);
        assert_eq!(state.gallery_image_key, GalleryKey::Front);
    }

    #[test]
    fn test_sidebar_closes_at_breakpoint() {
        let mut state = ViewState::new();
        state.open_sidebar();
        state.viewport_resized(767, 768);
        assert!(state.sidebar_open);
        state.viewport_resized(768, 768);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_sidebar_independent_of_overlay() {
        let mut state = ViewState::new();
        state.toggle_sidebar();
        state.select_product(ProductId::new("a"));
        state.close_detail();
        assert!(state.sidebar_open);
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_alert_dismiss_is_one_way() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::DismissAlert);
        for event in [
            ViewEvent::ClearSearch,
            ViewEvent::ToggleSidebar,
            ViewEvent::OpenProduct(ProductId::new("a")),
            ViewEvent::CloseDetail,
        ] {
            state.apply(event);
            assert!(!state.alert_visible());
        }
    }

    #[test]
    fn test_tabs_hidden_while_typing() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::Search(" ".into()));
        assert!(!state.tabs_visible());
        state.apply(ViewEvent::ClearSearch);
        assert!(state.tabs_visible());
    }

    #[test]
    fn test_visible_and_selected_products() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new();
        state.apply(ViewEvent::SelectCategory(Category::Xiaomi));
        let visible = state.visible_products(&catalog);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category == Category::Xiaomi));

        let id = visible[0].id.clone();
        state.apply(ViewEvent::OpenProduct(id.clone()));
        assert_eq!(state.selected_product(&catalog).map(|p| &p.id), Some(&id));

        state.apply(ViewEvent::OpenProduct(ProductId::new("unknown")));
        assert!(state.selected_product(&catalog).is_none());
    }

    #[test]
    fn test_apply_uses_breakpoint() {
        let mut state = ViewState::new();
        state.apply(ViewEvent::OpenSidebar);
        state.apply_with_breakpoint(ViewEvent::ViewportResized { width: 900 }, 1024);
        assert!(state.sidebar_open);
        state.apply(ViewEvent::ViewportResized { width: 900 });
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_closed_overlay_stays_on_front() {
        let mut state = ViewState::new();
        for event in [
            ViewEvent::ShowImage(GalleryKey::Back),
            ViewEvent::OpenProduct(ProductId::new("a")),
            ViewEvent::ShowImage(GalleryKey::Side),
            ViewEvent::CloseDetail,
            ViewEvent::ShowImage(GalleryKey::Back),
            ViewEvent::ToggleSidebar,
        ] {
            state.apply(event);
            if !state.detail_open() {
                assert_eq!(state.gallery_image_key, GalleryKey::Front);
            }
        }
    }
}
