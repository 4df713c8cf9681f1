//! Scrape configuration with browser-like defaults.
//!
//! [`ScrapeConfig`] controls which storefront is scraped, where its pages
//! live, and the request headers and timeout used by the page fetcher.

use crate::error::ScrapeError;
use crate::storefronts;
use crate::types::Storefront;
use serde::{Deserialize, Serialize};

/// Desktop Chrome User-Agent sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// `Accept` header matching a desktop browser navigation.
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// `Accept-Language` header.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Configuration for fetching and extracting storefront pages.
///
/// Use [`Default::default()`] for the production storefront, or override
/// `base_url` to point the scraper at a mirror or a mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Which storefront's layout tables to use.
    pub storefront: Storefront,
    /// Origin override. `None` uses the storefront's public origin.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept header value.
    pub accept: String,
    /// Accept-Language header value.
    pub accept_language: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            storefront: Storefront::Daraz,
            base_url: None,
            timeout_seconds: 120,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_owned(),
        }
    }
}

impl ScrapeConfig {
    /// Config for `storefront` served from `base_url`.
    pub fn with_base_url(storefront: Storefront, base_url: impl Into<String>) -> Self {
        Self {
            storefront,
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// The origin pages are fetched from.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(storefronts::layout(self.storefront).default_base_url)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent` must not be blank
    /// - the effective base URL must parse as an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.timeout_seconds == 0 {
            return Err(ScrapeError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ScrapeError::Config("user_agent must not be empty".into()));
        }
        let base = url::Url::parse(self.effective_base_url())
            .map_err(|e| ScrapeError::Config(format!("invalid base_url: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ScrapeError::Config(format!(
                "base_url must be http or https, got {}",
                base.scheme()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_browser_values() {
        let config = ScrapeConfig::default();
        assert_eq!(config.storefront, Storefront::Daraz);
        assert_eq!(config.timeout_seconds, 120);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.accept.starts_with("text/html"));
        assert_eq!(config.accept_language, "en-US,en;q=0.5");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn default_base_url_follows_storefront() {
        assert_eq!(
            ScrapeConfig::default().effective_base_url(),
            "https://www.daraz.com.np"
        );
        let amazon = ScrapeConfig {
            storefront: Storefront::Amazon,
            ..Default::default()
        };
        assert_eq!(amazon.effective_base_url(), "https://www.amazon.com");
    }

    #[test]
    fn base_url_override() {
        let config = ScrapeConfig::with_base_url(Storefront::Daraz, "http://127.0.0.1:4000");
        assert_eq!(config.effective_base_url(), "http://127.0.0.1:4000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(ScrapeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ScrapeConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn blank_user_agent_rejected() {
        let config = ScrapeConfig {
            user_agent: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user_agent"));
    }

    #[test]
    fn unparsable_base_url_rejected() {
        let config = ScrapeConfig::with_base_url(Storefront::Daraz, "daraz.com.np");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = ScrapeConfig::with_base_url(Storefront::Daraz, "ftp://daraz.com.np");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ScrapeConfig =
            serde_json::from_str(r#"{"storefront":"amazon","timeout_seconds":30}"#)
                .expect("deserialize");
        assert_eq!(config.storefront, Storefront::Amazon);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
