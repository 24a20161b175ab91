//! Product image with a per-instance fallback.
//!
//! Each image is wrapped in its own container. A load error flips that
//! container alone to the placeholder, and the broken `<img>` is removed so
//! it is never retried.

use vitrine_commerce::image::{ImageDisplay, ImageSlot, PLACEHOLDER_LABEL};

use crate::escape::html_escape;

const IMAGE_OFF_ICON: &str = r#"<svg class="image-off-icon" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><line x1="2" y1="2" x2="22" y2="22"/><path d="M10.41 10.41a2 2 0 1 1-2.83-2.83"/><line x1="13.5" y1="13.5" x2="6" y2="21"/><line x1="18" y1="12" x2="21" y2="15"/><path d="M3.59 3.59A1.99 1.99 0 0 0 3 5v14a2 2 0 0 0 2 2h14c.55 0 1.052-.22 1.41-.59"/><path d="M21 15V5a2 2 0 0 0-2-2H9"/></svg>"#;

const ON_ERROR: &str = "this.parentElement.classList.add('failed');this.remove()";

/// Render an image slot.
pub fn render_safe_image(slot: &ImageSlot, alt: &str, class: &str) -> String {
    match slot.display() {
        ImageDisplay::Image(src) => format!(
            r#"<div class="safe-image {class}"><img src="{src}" alt="{alt}" loading="lazy" onerror="{on_error}">{fallback}</div>"#,
            class = html_escape(class),
            src = html_escape(src),
            alt = html_escape(alt),
            on_error = ON_ERROR,
            fallback = render_placeholder(),
        ),
        ImageDisplay::Placeholder => format!(
            r#"<div class="safe-image failed {class}">{fallback}</div>"#,
            class = html_escape(class),
            fallback = render_placeholder(),
        ),
    }
}

fn render_placeholder() -> String {
    format!(
        r#"<div class="image-fallback" role="img" aria-label="{label}">{icon}<span>{label}</span></div>"#,
        label = PLACEHOLDER_LABEL,
        icon = IMAGE_OFF_ICON,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_has_own_fallback() {
        let html = render_safe_image(&ImageSlot::new("a.jpg"), "Foto", "card-image");
        assert!(html.starts_with(r#"<div class="safe-image card-image">"#));
        assert!(html.contains(r#"<img src="a.jpg" alt="Foto""#));
        assert!(html.contains("onerror="));
        assert!(html.contains(PLACEHOLDER_LABEL));
    }

    #[test]
    fn test_failed_slot_has_no_img() {
        let mut slot = ImageSlot::new("a.jpg");
        slot.mark_failed();
        let html = render_safe_image(&slot, "Foto", "card-image");
        assert!(html.contains("safe-image failed"));
        assert!(!html.contains("<img"));
    }
}
