//! Outbound links: messaging deep links and the social profile.
//!
//! Every outbound link opens in a new browsing context.

use crate::config::{MessagingConfig, SocialConfig};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Placeholder replaced by the product name in the inquiry template.
pub const PRODUCT_PLACEHOLDER: &str = "{product}";

/// Anchor attributes shared by every outbound link.
pub const NEW_CONTEXT_ATTRS: &str = r#"target="_blank" rel="noopener""#;

/// Destination of an outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Messaging conversation with a prefilled product inquiry.
    Inquiry,
    /// Messaging conversation without a message.
    Contact,
    /// Social profile page.
    Social,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Inquiry => "inquiry",
            LinkKind::Contact => "contact",
            LinkKind::Social => "social",
        }
    }
}

/// A fully built outbound URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub url: String,
}

impl OutboundLink {
    /// `href="..." target="_blank" rel="noopener"`, with `&` escaped.
    pub fn anchor_attrs(&self) -> String {
        format!(
            r#"href="{}" {}"#,
            self.url.replace('&', "&amp;").replace('"', "&quot;"),
            NEW_CONTEXT_ATTRS
        )
    }
}

impl fmt::Display for OutboundLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The prefilled inquiry message for a product.
pub fn inquiry_message(messaging: &MessagingConfig, product_name: &str) -> String {
    messaging
        .inquiry_template
        .replace(PRODUCT_PLACEHOLDER, product_name)
}

/// Parse `raw` as an absolute http(s) URL; anything else must not reach an `href`.
fn parse_web_url(raw: &str) -> Result<Url, CommerceError> {
    let url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CommerceError::InvalidLink(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            raw.trim()
        )));
    }
    Ok(url)
}

fn conversation_url(messaging: &MessagingConfig) -> Result<Url, CommerceError> {
    let mut url = parse_web_url(&messaging.base_url)?;
    url.path_segments_mut()
        .map_err(|_| CommerceError::InvalidLink(messaging.base_url.clone()))?
        .pop_if_empty()
        .push(messaging.contact_id.trim());
    Ok(url)
}

/// `<base>/<contact-id>?text=<message>`, query-encoded.
pub fn inquiry_link(
    messaging: &MessagingConfig,
    product_name: &str,
) -> Result<OutboundLink, CommerceError> {
    let mut url = conversation_url(messaging)?;
    url.query_pairs_mut()
        .append_pair("text", &inquiry_message(messaging, product_name));
    Ok(OutboundLink {
        kind: LinkKind::Inquiry,
        url: url.into(),
    })
}

/// `<base>/<contact-id>`.
pub fn contact_link(messaging: &MessagingConfig) -> Result<OutboundLink, CommerceError> {
    Ok(OutboundLink {
        kind: LinkKind::Contact,
        url: conversation_url(messaging)?.into(),
    })
}

/// The social profile, validated as an absolute http(s) URL.
pub fn social_link(social: &SocialConfig) -> Result<OutboundLink, CommerceError> {
    let url = parse_web_url(&social.instagram_url)?;
    Ok(OutboundLink {
        kind: LinkKind::Social,
        url: url.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_link() {
        let link = inquiry_link(&MessagingConfig::default(), "iPhone 16 128GB").unwrap();
        assert_eq!(link.kind, LinkKind::Inquiry);
        assert_eq!(
            link.url,
            "https://wa.me/5511960817540?text=Ol%C3%A1+WB%21+Tenho+interesse+no+iPhone+16+128GB"
        );
    }

    #[test]
    fn test_inquiry_link_decodes_to_message() {
        let link = inquiry_link(&MessagingConfig::default(), "Redmi 13C 8/256GB").unwrap();
        let parsed = Url::parse(&link.url).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned());
        assert_eq!(
            text.as_deref(),
            Some("Olá WB! Tenho interesse no Redmi 13C 8/256GB")
        );
    }

    #[test]
    fn test_contact_link() {
        let link = contact_link(&MessagingConfig::default()).unwrap();
        assert_eq!(link.url, "https://wa.me/5511960817540");
    }

    #[test]
    fn test_base_with_trailing_slash() {
        let messaging = MessagingConfig {
            base_url: "https://wa.me/".into(),
            ..MessagingConfig::default()
        };
        assert_eq!(
            contact_link(&messaging).unwrap().url,
            "https://wa.me/5511960817540"
        );
    }

    #[test]
    fn test_social_link() {
        let link = social_link(&SocialConfig::default()).unwrap();
        assert_eq!(link.url, "https://www.instagram.com/wbimportadoss/");
        assert!(link.anchor_attrs().ends_with(r#"target="_blank" rel="noopener""#));
    }

    #[test]
    fn test_invalid_base() {
        let messaging = MessagingConfig {
            base_url: "not a url".into(),
            ..MessagingConfig::default()
        };
        assert!(matches!(
            contact_link(&messaging),
            Err(CommerceError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_script_schemes_rejected() {
        let social = SocialConfig {
            instagram_url: "javascript:alert(1)".into(),
        };
        assert!(matches!(
            social_link(&social),
            Err(CommerceError::InvalidLink(_))
        ));

        let messaging = MessagingConfig {
            base_url: "data:text/html,hi".into(),
            ..MessagingConfig::default()
        };
        assert!(matches!(
            inquiry_link(&messaging, "Poco C85"),
            Err(CommerceError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_anchor_attrs_escape_ampersand() {
        let link = OutboundLink {
            kind: LinkKind::Inquiry,
            url: "https://x.test/?a=1&b=2".into(),
        };
        assert!(link.anchor_attrs().starts_with(r#"href="https://x.test/?a=1&amp;b=2""#));
    }
}
