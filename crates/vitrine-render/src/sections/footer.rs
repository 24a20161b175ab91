//! Footer and the floating contact button.

use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::links::contact_link;
use vitrine_commerce::CommerceError;

use crate::escape::html_escape;

/// Render the page footer.
pub fn render_footer(config: &StoreConfig) -> String {
    format!(
        r#"<footer class="site-footer" data-section="footer">
    <p>{}</p>
</footer>"#,
        html_escape(&config.store.footer)
    )
}

/// Render the floating messaging button.
pub fn render_floating_cta(config: &StoreConfig) -> Result<String, CommerceError> {
    let contact = contact_link(&config.messaging)?;
    Ok(format!(
        r#"<a class="floating-cta" data-section="cta" {} aria-label="Fale conosco no WhatsApp">&#128172;</a>"#,
        contact.anchor_attrs()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer() {
        let html = render_footer(&StoreConfig::default());
        assert!(html.contains("© 2022 WBIMPORTADOSS - PRODUTOS ORIGINAIS"));
    }

    #[test]
    fn test_floating_cta_opens_new_context() {
        let html = render_floating_cta(&StoreConfig::default()).unwrap();
        assert!(html.contains(r#"href="https://wa.me/5511960817540" target="_blank" rel="noopener""#));
    }
}
