//! Storefront selector tables.
//!
//! Each module describes one storefront's markup as static data: URL
//! templates plus the CSS selector rules used for every [`PageKind`]. The
//! extractor in [`crate::extract`] interprets these tables; it holds no
//! storefront-specific logic of its own.
//!
//! When a storefront changes its markup, update the table here and add a
//! fixture-based test next to it.

pub mod amazon;
pub mod daraz;

use crate::error::ScrapeError;
use crate::types::{PageKind, Storefront};
use url::Url;

/// How to read one product field from a candidate node.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Selector tried first.
    pub primary: &'static str,
    /// Selector tried when the primary yields an empty string.
    pub fallback: Option<&'static str>,
    /// Attribute to read instead of the text content.
    pub attr: Option<&'static str>,
}

impl FieldRule {
    /// Text of all `primary` matches.
    pub const fn text(primary: &'static str) -> Self {
        Self {
            primary,
            fallback: None,
            attr: None,
        }
    }

    /// Attribute of the first `primary` match.
    pub const fn attr(primary: &'static str, attr: &'static str) -> Self {
        Self {
            primary,
            fallback: None,
            attr: Some(attr),
        }
    }

    /// Same rule with a secondary selector.
    pub const fn or(self, fallback: &'static str) -> Self {
        Self {
            fallback: Some(fallback),
            ..self
        }
    }
}

/// When a candidate card becomes a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepRule {
    /// Keep when title or price is non-empty.
    TitleOrPrice,
    /// Keep only when both id and title are non-empty.
    IdAndTitle,
}

/// One family of product cards on a search-results page.
#[derive(Debug, Clone, Copy)]
pub struct CardFamily {
    /// Selector for candidate nodes.
    pub container: &'static str,
    /// Attribute on the candidate node holding the product id.
    pub id_attr: Option<&'static str>,
    /// Anchor whose `href` is the detail link, read when the id is missing.
    pub link: Option<&'static str>,
    pub title: FieldRule,
    pub price: FieldRule,
    pub image: FieldRule,
    pub rating: Option<FieldRule>,
    pub seller: Option<FieldRule>,
    pub keep: KeepRule,
    /// Build the storefront detail URL when a kept product has an id but no link.
    pub canonical_link: bool,
    /// Fill a placeholder review count when a rating is present without one.
    pub synthesize_review_count: bool,
}

/// Selector rules for a product detail page.
#[derive(Debug, Clone, Copy)]
pub struct DetailRules {
    /// The product block; fields are read inside every match, last one wins.
    pub container: &'static str,
    pub title: FieldRule,
    pub price: FieldRule,
    pub image: FieldRule,
    pub rating: Option<FieldRule>,
    pub review_count: Option<FieldRule>,
    pub description: Option<FieldRule>,
    /// Record the fetched page URL as the product link.
    pub record_page_url: bool,
}

/// Rule table selected for one page kind.
#[derive(Debug, Clone, Copy)]
pub enum PageRules {
    /// Card families tried in order against a search page.
    Search(&'static [CardFamily]),
    /// Rules for a detail page.
    Detail(&'static DetailRules),
}

/// Everything the scraper knows about one storefront.
#[derive(Debug)]
pub struct StoreLayout {
    /// Origin used when no base URL override is configured.
    pub default_base_url: &'static str,
    /// Path and query template for searches; `{query}` is replaced verbatim.
    pub search_path: &'static str,
    /// Path template for detail pages; `{id}` is replaced verbatim.
    pub detail_path: &'static str,
    pub search_families: &'static [CardFamily],
    pub detail: DetailRules,
}

impl StoreLayout {
    /// Select the rule table for `kind`.
    pub fn rules(&'static self, kind: PageKind) -> PageRules {
        match kind {
            PageKind::Search => PageRules::Search(self.search_families),
            PageKind::Detail => PageRules::Detail(&self.detail),
        }
    }

    /// Build the search URL for `query` under `base_url`.
    ///
    /// The query is embedded as-is, without percent-encoding. Reserved
    /// characters such as `&` or `#` therefore change the meaning of the URL.
    pub fn search_url(&self, base_url: &str, query: &str) -> Result<Url, ScrapeError> {
        join(base_url, &self.search_path.replace("{query}", query))
    }

    /// Build the detail URL for product `id` under `base_url`.
    pub fn detail_url(&self, base_url: &str, id: &str) -> Result<Url, ScrapeError> {
        join(base_url, &self.detail_path.replace("{id}", id))
    }
}

/// Look up the layout table for `storefront`.
pub fn layout(storefront: Storefront) -> &'static StoreLayout {
    match storefront {
        Storefront::Daraz => &daraz::LAYOUT,
        Storefront::Amazon => &amazon::LAYOUT,
    }
}

fn join(base_url: &str, path: &str) -> Result<Url, ScrapeError> {
    let raw = format!("{}{path}", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| ScrapeError::Config(format!("invalid target URL {raw}: {e}")))
}
