//! Embedded stylesheet.

pub const STOREFRONT_STYLES: &str = r##"
:root {
    --accent: #f97316;
    --accent-dark: #c2410c;
    --ink: #0a0a0a;
    --paper: #ffffff;
    --muted: #9ca3af;
    --whatsapp: #16a34a;
    --radius: 1.5rem;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: linear-gradient(135deg, #fb923c, #f97316 50%, #c2410c);
    color: var(--ink);
    min-height: 100vh;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
body.locked, body.menu-open { overflow: hidden; }

/* Marquee */
.marquee {
    background: var(--ink);
    color: var(--paper);
    overflow: hidden;
    padding: 0.5rem 0;
    font-size: 0.75rem;
    font-weight: 900;
    letter-spacing: 0.2em;
}
.marquee-track { display: inline-block; white-space: nowrap; animation: marquee 25s linear infinite; padding: 0 2rem; }
@keyframes marquee { 0% { transform: translateX(5%); } 100% { transform: translateX(-100%); } }

/* Header */
.site-header { max-width: 80rem; margin: 0 auto; padding: 1.5rem 1rem 1rem; display: flex; flex-direction: column; align-items: center; }
.header-bar { width: 100%; display: flex; align-items: center; justify-content: space-between; margin-bottom: 1.5rem; }
.menu-button { background: var(--ink); color: var(--paper); padding: 0.75rem 1rem; border-radius: 0.75rem; font-size: 1.25rem; }
.brand { text-align: center; flex: 1; }
.brand h1 { font-size: clamp(1.5rem, 5vw, 3rem); font-weight: 900; font-style: italic; text-transform: uppercase; letter-spacing: -0.05em; }
.tagline { display: inline-block; background: var(--ink); color: var(--paper); border-radius: 999px; padding: 0.25rem 0.75rem; font-size: 0.625rem; font-weight: 900; text-transform: uppercase; letter-spacing: 0.2em; }
.mascot { width: 3.5rem; height: 3.5rem; animation: float 4s ease-in-out infinite; }
@keyframes float { 0%, 100% { transform: translateY(0) rotate(2deg); } 50% { transform: translateY(-12px) rotate(-2deg); } }

.search-form { width: 100%; max-width: 42rem; display: flex; gap: 0.5rem; position: relative; }
.search-form input[type=search] { flex: 1; padding: 0.9rem 1rem; border-radius: 0.75rem; border: 2px solid transparent; font-weight: 700; }
.search-form input[type=search]:focus { border-color: var(--ink); outline: none; }
.search-form button { padding: 0 1.25rem; border: none; border-radius: 0.75rem; background: var(--ink); color: var(--paper); font-weight: 900; text-transform: uppercase; cursor: pointer; }
.search-clear { align-self: center; font-size: 1.5rem; padding: 0 0.5rem; }

/* Tabs */
.category-tabs { position: sticky; top: 0; z-index: 40; background: rgba(249, 115, 22, 0.9); backdrop-filter: blur(8px); overflow-x: auto; }
.tabs-row { display: flex; gap: 0.5rem; padding: 0.75rem 1rem; justify-content: center; min-width: max-content; }
.tab { padding: 0.75rem 1rem; border-radius: 0.75rem; font-weight: 900; font-size: 0.75rem; text-transform: uppercase; background: rgba(255, 255, 255, 0.5); border: 2px solid transparent; }
.tab.active { background: var(--ink); color: var(--paper); border-color: var(--ink); }

/* Grid */
.product-listing { max-width: 80rem; margin: 0 auto; padding: 1.5rem 1rem 6rem; }
.product-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; }
@media (min-width: 1024px) { .product-grid { grid-template-columns: repeat(3, 1fr); gap: 2.5rem; } }
@media (min-width: 1280px) { .product-grid { grid-template-columns: repeat(4, 1fr); } }
.product-card { display: flex; flex-direction: column; background: var(--paper); border-radius: var(--radius); overflow: hidden; box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15); }
.card-image { aspect-ratio: 4 / 5; background: #f9fafb; }
.card-body { padding: 0.75rem; display: flex; flex-direction: column; flex: 1; }
.product-title { font-size: 0.8rem; font-weight: 900; font-style: italic; text-transform: uppercase; line-height: 1.1; }
.card-footer { margin-top: auto; padding-top: 0.5rem; display: flex; justify-content: space-between; align-items: flex-end; }
.price-compare { color: var(--muted); text-decoration: line-through; font-size: 0.625rem; font-weight: 900; font-style: italic; }
.price-final { font-weight: 900; font-size: 1rem; letter-spacing: -0.05em; }
.card-arrow { background: var(--ink); color: var(--paper); border-radius: 0.5rem; width: 1.75rem; height: 1.75rem; display: flex; align-items: center; justify-content: center; }
.scarcity { color: var(--accent-dark); font-size: 0.7rem; font-weight: 900; }
.empty-state { text-align: center; font-weight: 900; padding: 4rem 1rem; }

/* Image fallback */
.safe-image { position: relative; overflow: hidden; }
.safe-image img { width: 100%; height: 100%; object-fit: cover; display: block; }
.safe-image .image-fallback { display: none; }
.safe-image.failed .image-fallback { display: flex; flex-direction: column; align-items: center; justify-content: center; width: 100%; height: 100%; background: #e5e7eb; color: var(--muted); font-size: 0.5rem; font-weight: 900; text-transform: uppercase; }

/* Detail overlay */
.detail-overlay { position: fixed; inset: 0; z-index: 300; display: flex; align-items: flex-end; justify-content: center; }
@media (min-width: 768px) { .detail-overlay { align-items: center; } }
.overlay-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.9); }
.detail-panel { position: relative; width: 100%; max-width: 56rem; max-height: 90vh; background: var(--paper); border-radius: 2.5rem 2.5rem 0 0; overflow: auto; display: flex; flex-direction: column; }
@media (min-width: 768px) { .detail-panel { flex-direction: row; border-radius: 2.5rem; } }
.detail-close { position: absolute; top: 1rem; right: 1rem; z-index: 10; font-size: 1.5rem; padding: 0.25rem 0.75rem; border-radius: 999px; background: rgba(0, 0, 0, 0.05); }
.detail-gallery { position: relative; background: #f3f4f6; flex: 1; min-height: 35vh; }
.gallery-main { width: 100%; height: 100%; min-height: 35vh; }
.gallery-thumbs { position: absolute; bottom: 1rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.5rem; }
.thumb { width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; border: 2px solid transparent; background: var(--paper); overflow: hidden; opacity: 0.5; }
.thumb.active { border-color: var(--accent); opacity: 1; }
.thumb-image { width: 100%; height: 100%; }
.detail-info { flex: 1; padding: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
.detail-info h2 { font-size: 1.75rem; font-weight: 900; font-style: italic; text-transform: uppercase; line-height: 1; }
.detail-description { color: var(--muted); font-size: 0.8rem; font-style: italic; border-left: 4px solid var(--accent); padding-left: 0.75rem; }
.stock { font-size: 0.75rem; font-weight: 900; text-transform: uppercase; }
.stock-available { color: var(--whatsapp); }
.stock-low { color: var(--accent-dark); }
.stock-out { color: #dc2626; }
.detail-colors, .detail-specs { list-style: none; display: flex; flex-wrap: wrap; gap: 0.5rem; font-size: 0.75rem; }
.detail-specs li { background: #f3f4f6; border-radius: 0.5rem; padding: 0.25rem 0.5rem; }
.swatch { display: flex; align-items: center; gap: 0.25rem; }
.swatch-dot { width: 0.9rem; height: 0.9rem; border-radius: 999px; border: 1px solid #d1d5db; background: #e5e7eb; }
.swatch-black .swatch-dot { background: #111827; }
.swatch-silver .swatch-dot { background: #d1d5db; }
.swatch-rose .swatch-dot { background: #fda4af; }
.swatch-gold .swatch-dot { background: #facc15; }
.swatch-white .swatch-dot { background: #ffffff; }
.swatch-orange .swatch-dot { background: #f97316; }
.swatch-blue .swatch-dot { background: #1d4ed8; }
.swatch-green .swatch-dot { background: #15803d; }
.swatch-lilac .swatch-dot { background: #c4b5fd; }
.swatch-purple .swatch-dot { background: #7e22ce; }
.swatch-white-black .swatch-dot { background: linear-gradient(90deg, #ffffff 50%, #111827 50%); }
.detail-buy { margin-top: auto; background: #f9fafb; border-radius: 2rem; padding: 1.5rem; }
.detail-buy .price-final { font-size: 2rem; }
.buy-button { display: block; margin-top: 1rem; text-align: center; background: var(--whatsapp); color: var(--paper); font-weight: 900; text-transform: uppercase; font-size: 0.75rem; padding: 1rem; border-radius: 0.75rem; }

/* Sidebar */
.sidebar { position: fixed; inset: 0 auto 0 0; z-index: 200; width: 100%; max-width: 20rem; background: var(--ink); color: var(--paper); padding: 1.5rem; transform: translateX(-100%); transition: transform 0.3s; }
.sidebar.open { transform: translateX(0); }
.sidebar-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2.5rem; }
.sidebar-header h2 { color: var(--accent); font-weight: 900; font-style: italic; text-transform: uppercase; }
.sidebar-close { font-size: 1.5rem; padding: 0.25rem 0.75rem; border-radius: 999px; background: rgba(255, 255, 255, 0.1); }
.sidebar-links { display: flex; flex-direction: column; gap: 1rem; }
.sidebar-link { background: #111827; border-radius: 1rem; padding: 1.25rem; font-weight: 700; }
.sidebar-backdrop { position: fixed; inset: 0; z-index: 190; background: rgba(0, 0, 0, 0.7); }

/* Alert */
.price-alert { position: fixed; bottom: 6rem; left: 1rem; right: 1rem; z-index: 250; background: var(--ink); color: var(--paper); padding: 1.25rem; border-radius: 2rem; border: 2px solid rgba(249, 115, 22, 0.5); }
@media (min-width: 768px) { .price-alert { left: auto; right: 2.5rem; width: 24rem; } }
.alert-dismiss { position: absolute; top: 0.75rem; right: 1rem; font-size: 1.25rem; }
.alert-kicker { color: #fb923c; font-size: 0.625rem; font-weight: 900; text-transform: uppercase; }
.alert-title { font-weight: 700; }
.alert-title span { color: var(--accent); }
.alert-body { color: var(--muted); font-size: 0.7rem; }
.alert-body strong { color: var(--paper); font-style: italic; }

/* Footer */
.site-footer { background: var(--ink); color: var(--paper); text-align: center; padding: 3rem 1rem; border-top: 4px solid #ea580c; font-size: 0.7rem; font-weight: 900; letter-spacing: 0.2em; }
.floating-cta { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 150; background: var(--whatsapp); color: var(--paper); border: 2px solid var(--paper); border-radius: 999px; width: 4rem; height: 4rem; display: flex; align-items: center; justify-content: center; font-size: 1.75rem; }
"##;

/// Rules that collapse an open sidebar once the viewport reaches
/// `breakpoint_px`, so a widened window never shows it without a reload.
pub fn sidebar_breakpoint_styles(breakpoint_px: u32) -> String {
    format!(
        "@media (min-width: {}px) {{ \
.sidebar.open {{ transform: translateX(-100%); }} \
.sidebar-backdrop {{ display: none; }} \
body.menu-open:not(.locked) {{ overflow-y: auto; }} }}",
        breakpoint_px
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_breakpoint_styles() {
        let css = sidebar_breakpoint_styles(900);
        assert!(css.starts_with("@media (min-width: 900px) {"));
        assert!(css.contains(".sidebar.open { transform: translateX(-100%); }"));
        assert!(css.contains(".sidebar-backdrop { display: none; }"));
        assert!(css.ends_with("} }"));
    }

    #[test]
    fn test_base_styles_leave_breakpoint_to_config() {
        assert!(!STOREFRONT_STYLES.contains(".sidebar-backdrop { display: none; }"));
    }
}
