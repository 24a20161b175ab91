//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
///
/// Filtering and view-state transitions never fail; these cover data
/// authoring and lookups driven by external input (CLI arguments, query
/// strings, catalog files).
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Unknown category name.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unknown gallery key.
    #[error("Invalid gallery key: {0}")]
    InvalidGalleryKey(String),

    /// An outbound link could not be built.
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<url::ParseError> for CommerceError {
    fn from(e: url::ParseError) -> Self {
        CommerceError::InvalidLink(e.to_string())
    }
}
