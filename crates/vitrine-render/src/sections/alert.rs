//! Dismissible "prices updated" notice.

use vitrine_commerce::config::StoreConfig;
use vitrine_commerce::view::ViewState;

use crate::escape::html_escape;
use crate::query::href_with;

/// Render the notice, or nothing once dismissed.
pub fn render_alert(state: &ViewState, config: &StoreConfig) -> String {
    if !state.alert_visible() {
        return String::new();
    }

    format!(
        r#"<div class="price-alert" data-section="alert" role="status">
    <a class="alert-dismiss" href="{dismiss}" aria-label="Fechar aviso">&times;</a>
    <p class="alert-kicker">Última Atualização</p>
    <p class="alert-title">Preços atualizados em <span>{date}</span></p>
    <p class="alert-body">A {store} fornece <strong>produtos originais importados</strong>.</p>
</div>"#,
        dismiss = html_escape(&href_with(state, |s| s.dismiss_alert())),
        date = config.display.prices_updated_label(),
        store = html_escape(&config.store.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_visible_by_default() {
        let html = render_alert(&ViewState::new(), &StoreConfig::default());
        assert!(html.contains("Preços atualizados em <span>16/01/2025</span>"));
        assert!(html.contains(r#"href="/?alert=0""#));
    }

    #[test]
    fn test_dismissed_alert_is_gone() {
        let mut state = ViewState::new();
        state.dismiss_alert();
        assert!(render_alert(&state, &StoreConfig::default()).is_empty());
    }
}
