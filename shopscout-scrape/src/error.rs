//! Error types for the shopscout-scrape crate.
//!
//! All errors use stable string messages suitable for logs and for mapping
//! onto HTTP status codes by the server crate.

/// Errors that can occur while fetching or extracting storefront pages.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The outbound request could not complete (DNS, timeout, refused).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The storefront answered with a non-success status code.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// URL that produced the status.
        url: String,
    },

    /// A selector rule could not be compiled or the markup was unusable.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid scrape configuration or target URL.
    #[error("config error: {0}")]
    Config(String),

    /// The page was reachable but no product title could be recovered.
    #[error("product not found: {0}")]
    NotFound(String),
}

impl ScrapeError {
    /// Returns `true` for the "page reachable, product missing" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convenience type alias for shopscout-scrape results.
pub type Result<T> = std::result::Result<T, ScrapeError>;
