//! Configuration types for the shopscout HTTP service.

use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use shopscout_scrape::ScrapeConfig;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable pointing at an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "SHOPSCOUT_CONFIG";

/// Top-level configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Artificial delay applied to searches with `delay=true`, in milliseconds.
    pub search_delay_ms: u64,
    /// Upper bound on handling one request, in seconds. Slower requests get a 408.
    pub request_timeout_seconds: u64,
    /// Scraper settings.
    pub scrape: ScrapeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            search_delay_ms: 1000,
            request_timeout_seconds: 15,
            scrape: ScrapeConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Build the configuration from the process environment.
    ///
    /// Reads the file named by `SHOPSCOUT_CONFIG` when set, then applies
    /// `PORT` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable, `PORT` is not a
    /// valid port number, or the resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        let port = std::env::var(PORT_ENV).ok();
        let config = config.with_port_override(port.as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a raw `PORT` value. Unset or empty keeps the current port.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `raw` is not a valid port number.
    pub fn with_port_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) {
            self.port = raw
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid {PORT_ENV} {raw:?}: {e}")))?;
        }
        Ok(self)
    }

    /// `host:port` to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Delay applied to searches that ask for one.
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Per-request handling deadline.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty host, a zero request timeout, or an
    /// invalid scrape section.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::Config("host must not be empty".into()));
        }
        if self.request_timeout_seconds == 0 {
            return Err(ServerError::Config(
                "request_timeout_seconds must be greater than 0".into(),
            ));
        }
        self.scrape.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use shopscout_scrape::Storefront;

    #[test]
    fn default_binds_all_interfaces_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.search_delay(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn port_override_applies() {
        let config = ServerConfig::default()
            .with_port_override(Some("9090"))
            .unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn empty_port_keeps_default() {
        let config = ServerConfig::default().with_port_override(Some("")).unwrap();
        assert_eq!(config.port, 8080);
        let config = ServerConfig::default().with_port_override(None).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_rejected() {
        let err = ServerConfig::default()
            .with_port_override(Some("eighty"))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(
            ServerConfig::default()
                .with_port_override(Some("70000"))
                .is_err()
        );
    }

    #[test]
    fn empty_host_rejected() {
        let config = ServerConfig {
            host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("host"));
    }

    #[test]
    fn zero_request_timeout_rejected() {
        let config = ServerConfig {
            request_timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_timeout_seconds"));
    }

    #[test]
    fn invalid_scrape_section_rejected() {
        let mut config = ServerConfig::default();
        config.scrape.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_file_reads_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopscout.toml");
        std::fs::write(
            &path,
            r#"
port = 3000
search_delay_ms = 250

[scrape]
storefront = "amazon"
timeout_seconds = 30
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.search_delay_ms, 250);
        assert_eq!(config.scrape.storefront, Storefront::Amazon);
        assert_eq!(config.scrape.timeout_seconds, 30);
        assert_eq!(
            config.scrape.accept_language,
            ScrapeConfig::default().accept_language
        );
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = ServerConfig::from_file(Path::new("/nonexistent/path/shopscout.toml"));
        assert!(matches!(result, Err(ServerError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "port = [not valid").unwrap();
        let result = ServerConfig::from_file(&path);
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn toml_round_trip() {
        let config = ServerConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let decoded: ServerConfig = toml::from_str(&text).unwrap();
        assert_eq!(decoded, config);
    }
}
