//! Search module.
//!
//! The listing is a linear scan over the catalog: no ranking, sorting or
//! pagination. Catalog order is result order.

mod query;

pub use query::{visible_products, ListingQuery};
