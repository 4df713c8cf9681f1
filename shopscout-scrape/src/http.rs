//! Page fetcher: one GET per page with browser-like headers.
//!
//! Provides a configured [`reqwest::Client`] and [`fetch_page`], which
//! performs a single request with no retries. Transport failures and
//! non-success statuses come back as distinct [`ScrapeError`] variants so
//! callers can log them differently.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use url::Url;

/// A fetched storefront page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the final response.
    pub status: u16,
    /// URL of the final response, after redirects.
    pub url: String,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

/// Build a [`reqwest::Client`] configured for storefront scraping.
///
/// The client has:
/// - Cookie store enabled (storefronts set session cookies on first visit)
/// - Timeout from config
/// - Fixed User-Agent from config
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ScrapeConfig) -> Result<reqwest::Client, ScrapeError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ScrapeError::Http(format!("failed to build HTTP client: {e}")))
}

/// Fetch `url` once.
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] when the request cannot complete or the body
/// cannot be read, and [`ScrapeError::Status`] for a non-success status.
pub async fn fetch_page(
    client: &reqwest::Client,
    config: &ScrapeConfig,
    url: Url,
) -> Result<FetchedPage, ScrapeError> {
    tracing::trace!(%url, "fetching page");

    let response = client
        .get(url.clone())
        .header(ACCEPT, config.accept.as_str())
        .header(ACCEPT_LANGUAGE, config.accept_language.as_str())
        .send()
        .await
        .map_err(|e| ScrapeError::Http(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            status: status.as_u16(),
            url: final_url,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::Http(format!("response read from {final_url} failed: {e}")))?;

    tracing::debug!(url = %final_url, bytes = body.len(), "visited");

    Ok(FetchedPage {
        status: status.as_u16(),
        url: final_url,
        headers,
        body,
    })
}
