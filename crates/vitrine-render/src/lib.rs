//! Server-side rendering of the Vitrine storefront page.
//!
//! The page is a shell plus named sections, each rendered independently
//! from a [`ViewState`](vitrine_commerce::view::ViewState). Every
//! interactive element is a plain link or GET form whose target URL
//! encodes the next state (see [`query`]), so the page works without
//! client-side scripting. The only script is the per-image `onerror`
//! fallback.
//!
//! - `Shell` / `HeadContent` - document head and body wrapper
//! - `Storefront` - assembles sections into a page
//! - `PageQuery` - view state to and from the query string

mod escape;
mod page;
pub mod query;
pub mod sections;
mod shell;
mod styles;

pub use escape::html_escape;
pub use page::{render_page, RenderedSection, Storefront};
pub use query::{href_with, state_href, to_query_string, PageQuery, PAGE_PATH};
pub use shell::{HeadContent, Shell};
pub use styles::{sidebar_breakpoint_styles, STOREFRONT_STYLES};
