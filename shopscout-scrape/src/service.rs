//! Search and detail orchestration: fetch → extract → fall back.
//!
//! Fetch and extraction failures never reach the caller of
//! [`ProductService::search`]; they are logged and replaced by the sample
//! products. [`ProductService::detail`] reports a [`ScrapeError::NotFound`]
//! alongside the sample product when the page was fetched but no title
//! could be extracted, so "fallback served" and "error reported" are
//! independent outcomes.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extract::{extract, PageContext};
use crate::fallback::{fallback_product, fallback_products};
use crate::http;
use crate::storefronts;
use crate::types::{PageKind, Product, SearchResults};

/// Result of a detail lookup.
#[derive(Debug)]
pub struct DetailOutcome {
    /// The extracted product, or the sample product carrying the requested id.
    pub product: Product,
    /// Set when the page was reachable but the product could not be read.
    pub error: Option<ScrapeError>,
    /// Whether `product` is sample data.
    pub fallback: bool,
}

impl DetailOutcome {
    fn live(product: Product) -> Self {
        Self {
            product,
            error: None,
            fallback: false,
        }
    }

    fn fallback(id: &str, error: Option<ScrapeError>) -> Self {
        Self {
            product: fallback_product(id),
            error,
            fallback: true,
        }
    }
}

/// Scrapes one storefront with a shared HTTP client.
///
/// Cheap to share behind an `Arc`; holds no per-request state.
#[derive(Debug, Clone)]
pub struct ProductService {
    config: ScrapeConfig,
    client: reqwest::Client,
}

impl ProductService {
    /// Create a service for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Config`] for an invalid configuration and
    /// [`ScrapeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Search the storefront for `query`.
    ///
    /// The query is embedded in the search URL without percent-encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Config`] only when the search URL cannot be
    /// built. Fetch and extraction failures yield the sample products.
    pub async fn search(&self, query: &str) -> Result<SearchResults, ScrapeError> {
        let storefront = self.config.storefront;
        let base_url = self.config.effective_base_url();
        let url = storefronts::layout(storefront).search_url(base_url, query)?;

        tracing::info!(query, store = %storefront, "searching");

        let page = match http::fetch_page(&self.client, &self.config, url).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(query, error = %err, "search fetch failed, serving fallback products");
                return Ok(SearchResults::new(query, fallback_products()));
            }
        };

        let ctx = PageContext {
            storefront,
            base_url,
            page_url: &page.url,
            product_id: "",
        };
        let products = match extract(&page.body, PageKind::Search, &ctx) {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(query, error = %err, "search extraction failed, serving fallback products");
                return Ok(SearchResults::new(query, fallback_products()));
            }
        };

        if products.is_empty() {
            tracing::info!(query, "no products extracted, serving fallback products");
            return Ok(SearchResults::new(query, fallback_products()));
        }

        tracing::info!(query, count = products.len(), "found products");
        Ok(SearchResults::new(query, products))
    }

    /// Fetch the detail page for product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Config`] only when the detail URL cannot be
    /// built. Every other failure is folded into the [`DetailOutcome`].
    pub async fn detail(&self, id: &str) -> Result<DetailOutcome, ScrapeError> {
        let storefront = self.config.storefront;
        let base_url = self.config.effective_base_url();
        let url = storefronts::layout(storefront).detail_url(base_url, id)?;

        tracing::info!(id, store = %storefront, "fetching product detail");

        let page = match http::fetch_page(&self.client, &self.config, url).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(id, error = %err, "detail fetch failed, serving fallback product");
                return Ok(DetailOutcome::fallback(id, None));
            }
        };

        let ctx = PageContext {
            storefront,
            base_url,
            page_url: &page.url,
            product_id: id,
        };
        let product = match extract(&page.body, PageKind::Detail, &ctx) {
            Ok(products) => products.into_iter().next().unwrap_or_default(),
            Err(err) => {
                tracing::warn!(id, error = %err, "detail extraction failed, serving fallback product");
                return Ok(DetailOutcome::fallback(id, None));
            }
        };

        if product.title.is_empty() {
            tracing::info!(id, "no title on detail page");
            return Ok(DetailOutcome::fallback(
                id,
                Some(ScrapeError::NotFound(id.to_owned())),
            ));
        }

        tracing::info!(id, title = %product.title, "retrieved product detail");
        Ok(DetailOutcome::live(product))
    }
}
