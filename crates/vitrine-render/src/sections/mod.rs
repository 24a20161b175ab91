//! Section renderers for the storefront page.

mod alert;
mod detail;
mod footer;
mod grid;
mod header;
mod image;
mod sidebar;
mod tabs;

pub use alert::*;
pub use detail::*;
pub use footer::*;
pub use grid::*;
pub use header::*;
pub use image::*;
pub use sidebar::*;
pub use tabs::*;
