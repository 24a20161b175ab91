//! Image fallback latch.

/// Label shown in place of an image that could not be loaded.
pub const PLACEHOLDER_LABEL: &str = "Imagem indisponível";

/// What an image slot currently presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDisplay<'a> {
    /// Attempt to load this location.
    Image(&'a str),
    /// Fixed placeholder with [`PLACEHOLDER_LABEL`].
    Placeholder,
}

/// One rendered image instance.
///
/// Each slot owns its own failure flag: two slots with the same location
/// fail independently. Once failed, a slot never tries the location again.
///
/// The server-rendered page only decides the initial presentation here (an
/// empty location starts as the placeholder). Load failures after that are
/// latched in the browser by the wrapper's `onerror` handler, which flips
/// the same wrapper to the failed markup. [`mark_failed`](Self::mark_failed)
/// only lets a renderer emit a slot already known to be broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    failed: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Record a load failure. There is no way back.
    pub fn mark_failed(&mut self) {
        if !self.failed {
            tracing::debug!(src = %self.src, "image failed, showing placeholder");
        }
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn display(&self) -> ImageDisplay<'_> {
        let src = self.src.trim();
        if self.failed || src.is_empty() {
            ImageDisplay::Placeholder
        } else {
            ImageDisplay::Image(src)
        }
    }
}
