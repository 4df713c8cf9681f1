//! Error types for the shopscout server.

use shopscout_scrape::ScrapeError;

/// Top-level error type for the HTTP service.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (binding the listener, reading config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scraper construction error.
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = ServerError::Config("invalid PORT".into());
        assert_eq!(err.to_string(), "config error: invalid PORT");
    }

    #[test]
    fn scrape_errors_are_transparent() {
        let err: ServerError = ScrapeError::Config("bad base".into()).into();
        assert_eq!(err.to_string(), "config error: bad base");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ServerError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
