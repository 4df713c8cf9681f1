//! # shopscout-scrape
//!
//! Storefront scraping for shopscout.
//!
//! Fetches a storefront's search-results or product-detail page, extracts
//! product records with per-storefront CSS selector tables, and falls back
//! to a fixed set of sample products whenever live extraction is unavailable.
//!
//! ## Design
//!
//! - One GET per page with browser-like headers; no retries, no caching
//! - Selector rules are static data keyed by storefront and page kind
//! - Extraction is a pure `html → Vec<Product>` function
//! - Graceful degradation: fetch failures, parse failures, and empty pages
//!   all resolve to sample data instead of errors

pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod http;
pub mod service;
pub mod storefronts;
pub mod types;

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use service::{DetailOutcome, ProductService};
pub use types::{PageKind, Product, SearchResults, Storefront};

/// Search a storefront with a one-off [`ProductService`].
///
/// # Errors
///
/// Returns [`ScrapeError::Config`] if `config` is invalid or the search URL
/// cannot be built. Fetch and extraction failures yield sample products.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> shopscout_scrape::Result<()> {
/// let config = shopscout_scrape::ScrapeConfig::default();
/// let results = shopscout_scrape::search("earbuds", &config).await?;
/// for product in &results.products {
///     println!("{}: {}", product.title, product.price);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &ScrapeConfig) -> Result<SearchResults> {
    ProductService::new(config.clone())?.search(query).await
}

/// Fetch one product's detail page with a one-off [`ProductService`].
///
/// # Errors
///
/// Same as [`search`]; a missing title is reported in
/// [`DetailOutcome::error`], not here.
pub async fn product_detail(id: &str, config: &ScrapeConfig) -> Result<DetailOutcome> {
    ProductService::new(config.clone())?.detail(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = ScrapeConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn detail_validates_config_bad_base_url() {
        let config = ScrapeConfig::with_base_url(Storefront::Daraz, "nope");
        let result = product_detail("1", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }
}
