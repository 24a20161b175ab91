//! Newtype IDs for type-safe identifiers.
//!
//! Product ids are not generated: they are derived from the product name so
//! that the same authored record always yields the same id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the id is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);

impl ProductId {
    /// Derive an id from a display name: lowercased, with every run of
    /// whitespace collapsed into a single hyphen.
    ///
    /// ```
    /// use vitrine_commerce::ProductId;
    /// let id = ProductId::from_name("iPhone 17 Pro Max 256GB");
    /// assert_eq!(id.as_str(), "iphone-17-pro-max-256gb");
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }
}

/// Lowercase `name` and replace whitespace runs with `-`.
///
/// Leading and trailing whitespace also turn into a hyphen, matching the
/// authored ids byte for byte.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }

    slug
}
