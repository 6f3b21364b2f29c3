//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use thiserror::Error;

use super::settings::{DEFAULT_FORM_ENDPOINT, SiteSettings, is_http_url};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FORM_ENDPOINT must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
    #[error("SITE_URL must be an http(s) URL, got {0:?}")]
    InvalidSiteUrl(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the early-access form posts to
    /// Example: https://formspree.io/f/xyzabcd
    pub form_endpoint: String,

    /// Canonical public URL of the site, used for `<link rel="canonical">`
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            form_endpoint: std::env::var("FORM_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FORM_ENDPOINT.to_string()),
            site_url: std::env::var("SITE_URL").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// Check if a real endpoint was configured instead of the placeholder
    pub fn has_custom_endpoint(&self) -> bool {
        self.form_endpoint != DEFAULT_FORM_ENDPOINT
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.form_endpoint) {
            return Err(ConfigError::InvalidEndpoint(self.form_endpoint.clone()));
        }
        if let Some(url) = &self.site_url
            && !is_http_url(url)
        {
            return Err(ConfigError::InvalidSiteUrl(url.clone()));
        }
        Ok(())
    }

    /// Settings provided to the page render
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            form_endpoint: self.form_endpoint.clone(),
            canonical_url: self.site_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            form_endpoint: "https://formspree.io/f/abc123".to_string(),
            site_url: Some("https://learnr.app".to_string()),
        };

        assert!(config.has_custom_endpoint());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config.site_settings(),
            SiteSettings {
                form_endpoint: "https://formspree.io/f/abc123".to_string(),
                canonical_url: Some("https://learnr.app".to_string()),
            }
        );
    }

    #[test]
    fn test_placeholder_endpoint_is_valid_but_not_custom() {
        let config = Config {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            site_url: None,
        };

        assert!(!config.has_custom_endpoint());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.site_settings(), SiteSettings::default());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let config = Config {
            form_endpoint: "mailto:hello@learnr.app".to_string(),
            site_url: None,
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint("mailto:hello@learnr.app".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_site_url() {
        let config = Config {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            site_url: Some("learnr.app".to_string()),
        };

        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "SITE_URL must be an http(s) URL, got \"learnr.app\"");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only the invariants are checked
        let config = Config::from_env();

        assert!(!config.form_endpoint.is_empty());
        let _ = config.validate();
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            form_endpoint: "https://example.com/f".to_string(),
            site_url: None,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("form_endpoint"));
    }
}
