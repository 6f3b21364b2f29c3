//! Per-site settings shared between the server render and the page

/// Placeholder Formspree form used when no endpoint is configured
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/your-form-id";

/// Values the server hands to the page through Leptos context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Rendered into the early-access form's `action`
    pub form_endpoint: String,
    pub canonical_url: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            canonical_url: None,
        }
    }
}

pub fn is_http_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_placeholder_endpoint() {
        let settings = SiteSettings::default();
        assert_eq!(settings.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert!(settings.canonical_url.is_none());
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://formspree.io/f/abc"));
        assert!(is_http_url("http://localhost:3000/submit"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("/relative"));
        assert!(!is_http_url(""));
    }
}
